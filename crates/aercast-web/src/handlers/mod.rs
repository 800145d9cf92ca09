//! HTTP handlers for the forecast service.

pub mod forecast;
