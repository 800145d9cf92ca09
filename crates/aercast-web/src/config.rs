//! Configuration for the forecast service.
//! Reads aercast.toml from the current directory or the path in the
//! AERCAST_CONFIG env var; missing file falls back to defaults.

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
    /// Google Air Quality API key. Falls back to GOOGLE_AQ_API_KEY.
    pub google_api_key: Option<String>,
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}
fn default_lookback_days() -> i64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            lookback_days: default_lookback_days(),
            google_api_key: None,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("AERCAST_CONFIG").unwrap_or_else(|_| "aercast.toml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn api_key(&self) -> anyhow::Result<String> {
        if let Some(key) = &self.google_api_key {
            return Ok(key.clone());
        }
        std::env::var("GOOGLE_AQ_API_KEY").map_err(|_| {
            anyhow::anyhow!(
                "No Google Air Quality API key configured.\n\
                 Set google_api_key in aercast.toml or the GOOGLE_AQ_API_KEY env var."
            )
        })
    }
}
