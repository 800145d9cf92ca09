//! Shared application state for the forecast service.

use aercast_forecast::history::AirQualityHistory;
use std::sync::Arc;

/// State injected into every Axum handler. The history source is held
/// behind its trait so tests can substitute a fixed window.
pub struct AppState {
    pub history: Arc<dyn AirQualityHistory>,
    pub lookback_days: i64,
}

pub type SharedState = Arc<AppState>;
