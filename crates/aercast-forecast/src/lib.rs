//! aercast-forecast — air-quality forecasting domain library.
//!
//! Provides the pieces the forecast endpoint orchestrates:
//!   - Hourly history client for the Google Air Quality API
//!   - Feature table built from the fetched window
//!   - Ordinary-least-squares regression model
//!   - NAQI severity category mapping

pub mod category;
pub mod history;
pub mod model;
pub mod table;
