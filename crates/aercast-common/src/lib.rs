//! aercast-common — shared error types for the Aercast services.

pub mod error;
