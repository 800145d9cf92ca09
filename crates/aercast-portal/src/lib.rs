//! aercast-portal — session-gated login/registration portal.
//!
//! Register/login over an in-memory credential table, with a cookie-keyed
//! server-side session gating the dashboard page. Nothing persists across
//! restarts.

pub mod config;
pub mod handlers;
pub mod router;
pub mod sessions;
pub mod state;
pub mod users;
