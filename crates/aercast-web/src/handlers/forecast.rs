//! Forecast endpoint — fetch a 30-day window, fit a fresh model, predict,
//! classify. The model is request-scoped; nothing is cached across calls.

use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use aercast_common::error::ApiError;
use aercast_forecast::category::NaqiCategory;
use aercast_forecast::model::LinearModel;
use aercast_forecast::table::{FeatureTable, FEATURE_COUNT};

use crate::state::SharedState;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Optional explicit feature vector in the order
    /// (pm2_5, pm10, no2, o3, co). Bypasses the window-mean path.
    pub features: Option<Vec<f64>>,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub predicted_naqi: f64,
    pub category: &'static str,
}

/// POST /forecast-aqi
pub async fn forecast_aqi(
    State(state): State<SharedState>,
    Json(req): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, ApiError> {
    // Zero coordinates are rejected along with missing ones; 0.0 is treated
    // as absent for parity with the deployed service (see DESIGN.md).
    let (lat, lon) = match (req.latitude, req.longitude) {
        (Some(lat), Some(lon)) if lat != 0.0 && lon != 0.0 => (lat, lon),
        _ => {
            return Err(ApiError::BadRequest(
                "Latitude and longitude are required.".to_string(),
            ))
        }
    };

    let end = Utc::now();
    let start = end - Duration::days(state.lookback_days);
    let records = state
        .history
        .fetch_hourly(
            lat,
            lon,
            &start.format(TIMESTAMP_FORMAT).to_string(),
            &end.format(TIMESTAMP_FORMAT).to_string(),
        )
        .await?;

    if records.is_empty() {
        return Err(ApiError::BadRequest(
            "No data available for the specified location and time range.".to_string(),
        ));
    }

    let table = FeatureTable::from_records(&records);
    let model = LinearModel::fit(&table)?;

    let features: [f64; FEATURE_COUNT] = match req.features {
        Some(values) => values.try_into().map_err(|v: Vec<f64>| {
            ApiError::Internal(format!(
                "expected {} feature values, got {}",
                FEATURE_COUNT,
                v.len()
            ))
        })?,
        None => table.column_means(),
    };

    let predicted_naqi = model.predict(&features);
    let category = NaqiCategory::from_value(predicted_naqi);
    info!(
        lat,
        lon,
        rows = table.len(),
        predicted_naqi,
        category = category.as_str(),
        "forecast computed"
    );

    Ok(Json(ForecastResponse {
        predicted_naqi,
        category: category.as_str(),
    }))
}
