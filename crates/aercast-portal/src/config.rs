//! Configuration for the portal.
//! Reads aercast-portal.toml (path overridable via AERCAST_PORTAL_CONFIG);
//! a missing file falls back to defaults.

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:5001".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("AERCAST_PORTAL_CONFIG")
            .unwrap_or_else(|_| "aercast-portal.toml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind() {
        assert_eq!(Config::default().bind, "127.0.0.1:5001");
    }

    #[test]
    fn test_parse_toml_override() {
        let config: Config = toml::from_str(r#"bind = "0.0.0.0:9000""#).unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000");
    }
}
