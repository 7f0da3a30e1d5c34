// CLI configuration, mirroring assets/config/default.json
pub mod form;

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

pub use form::FormDefaults;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub engine: EngineConnSettings,
    pub display: DisplaySettings,
    pub defaults: FormDefaults,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EngineConnSettings {
    pub host: String,
    pub port: u16,
}

impl EngineConnSettings {
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    /// Unit label for cash flows and enterprise value
    pub amount_unit: String,
    /// Unit label for the per-share price
    pub price_unit: String,
    /// Width in characters of the longest chart bar
    pub chart_width: usize,
}

impl AppConfig {
    // The default config is embedded so the binary works from any directory
    pub fn load_default() -> anyhow::Result<Self> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: AppConfig = serde_json::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        Ok(config)
    }

    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_default(),
        }
    }
}
