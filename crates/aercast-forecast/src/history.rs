//! Hourly air-quality history client.
//!
//! Uses the Google Air Quality history API:
//!   https://airquality.googleapis.com/v1/history:lookup
//!
//! Responses are paged; the client follows `nextPageToken` until the
//! requested window is exhausted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, ClientBuilder};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const HISTORY_URL: &str = "https://airquality.googleapis.com/v1/history:lookup";
const PAGE_SIZE: u32 = 168; // one week of hours per page

/// One parsed hour of history: the five pollutant concentrations plus the
/// local (Indian) AQI for that hour.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRecord {
    pub timestamp: Option<DateTime<Utc>>,
    pub pm2_5: f64,
    pub pm10: f64,
    pub no2: f64,
    pub o3: f64,
    pub co: f64,
    pub naqi: f64,
}

/// Interface for fetching an hourly history window for a coordinate.
/// `start` and `end` are UTC timestamps formatted `%Y-%m-%dT%H:%M:%SZ`.
#[async_trait]
pub trait AirQualityHistory: Send + Sync {
    async fn fetch_hourly(
        &self,
        latitude: f64,
        longitude: f64,
        start: &str,
        end: &str,
    ) -> anyhow::Result<Vec<HourlyRecord>>;
}

pub struct GoogleHistoryClient {
    client: Client,
    api_key: String,
}

impl GoogleHistoryClient {
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, api_key })
    }

    fn page_body(
        &self,
        latitude: f64,
        longitude: f64,
        start: &str,
        end: &str,
        page_token: Option<&str>,
    ) -> serde_json::Value {
        let mut body = json!({
            "location": { "latitude": latitude, "longitude": longitude },
            "period": { "startTime": start, "endTime": end },
            "extraComputations": ["LOCAL_AQI", "POLLUTANT_CONCENTRATION"],
            "pageSize": PAGE_SIZE,
        });
        if let Some(token) = page_token {
            body["pageToken"] = json!(token);
        }
        body
    }
}

#[async_trait]
impl AirQualityHistory for GoogleHistoryClient {
    #[instrument(skip(self))]
    async fn fetch_hourly(
        &self,
        latitude: f64,
        longitude: f64,
        start: &str,
        end: &str,
    ) -> anyhow::Result<Vec<HourlyRecord>> {
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let body = self.page_body(latitude, longitude, start, end, page_token.as_deref());
            let resp = self
                .client
                .post(HISTORY_URL)
                .header("X-Goog-Api-Key", &self.api_key)
                .json(&body)
                .send()
                .await?
                .error_for_status()?
                .json::<serde_json::Value>()
                .await?;

            let hours = resp["hoursInfo"].as_array().cloned().unwrap_or_default();
            debug!(fetched = hours.len(), "history page received");

            for hour in &hours {
                match parse_hour(hour) {
                    Some(record) => records.push(record),
                    None => warn!("skipping hour with incomplete pollutant data"),
                }
            }

            page_token = resp["nextPageToken"].as_str().map(String::from);
            if page_token.is_none() {
                break;
            }
        }

        Ok(records)
    }
}

/// Parse one `hoursInfo` entry. Returns `None` if the local AQI or any of
/// the five pollutant concentrations is missing.
fn parse_hour(hour: &serde_json::Value) -> Option<HourlyRecord> {
    let timestamp = hour["dateTime"]
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc));

    let naqi = hour["indexes"]
        .as_array()?
        .iter()
        .find(|idx| idx["code"].as_str() == Some("ind"))
        .and_then(|idx| idx["aqi"].as_f64())?;

    let pollutant = |code: &str| -> Option<f64> {
        hour["pollutants"]
            .as_array()?
            .iter()
            .find(|p| p["code"].as_str() == Some(code))
            .and_then(|p| p["concentration"]["value"].as_f64())
    };

    Some(HourlyRecord {
        timestamp,
        pm2_5: pollutant("pm25")?,
        pm10: pollutant("pm10")?,
        no2: pollutant("no2")?,
        o3: pollutant("o3")?,
        co: pollutant("co")?,
        naqi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour_json(naqi: f64, pm25: f64) -> serde_json::Value {
        json!({
            "dateTime": "2025-08-01T12:00:00Z",
            "indexes": [
                { "code": "uaqi", "aqi": 60.0 },
                { "code": "ind", "aqi": naqi }
            ],
            "pollutants": [
                { "code": "pm25", "concentration": { "value": pm25 } },
                { "code": "pm10", "concentration": { "value": 80.0 } },
                { "code": "no2",  "concentration": { "value": 20.0 } },
                { "code": "o3",   "concentration": { "value": 30.0 } },
                { "code": "co",   "concentration": { "value": 400.0 } }
            ]
        })
    }

    #[test]
    fn test_parse_hour_reads_local_index_and_pollutants() {
        let record = parse_hour(&hour_json(120.0, 45.5)).expect("should parse");
        assert_eq!(record.naqi, 120.0);
        assert_eq!(record.pm2_5, 45.5);
        assert_eq!(record.pm10, 80.0);
        assert!(record.timestamp.is_some());
    }

    #[test]
    fn test_parse_hour_missing_pollutant_is_skipped() {
        let mut hour = hour_json(120.0, 45.5);
        hour["pollutants"].as_array_mut().unwrap().remove(0);
        assert!(parse_hour(&hour).is_none());
    }

    #[test]
    fn test_parse_hour_missing_local_index_is_skipped() {
        let hour = json!({
            "indexes": [{ "code": "uaqi", "aqi": 60.0 }],
            "pollutants": []
        });
        assert!(parse_hour(&hour).is_none());
    }

    #[test]
    fn test_page_body_includes_token_only_when_present() {
        let client = GoogleHistoryClient::new("key".to_string()).unwrap();
        let first = client.page_body(28.6, 77.2, "a", "b", None);
        assert!(first.get("pageToken").is_none());

        let next = client.page_body(28.6, 77.2, "a", "b", Some("tok"));
        assert_eq!(next["pageToken"], "tok");
    }
}
