//! aercast-web — HTTP surface for the air-quality forecast service.
//! One endpoint: POST /forecast-aqi.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
