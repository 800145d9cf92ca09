//! HTTP handlers for the portal.

pub mod auth;
pub mod pages;
