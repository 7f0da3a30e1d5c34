// Engine settings, loaded from a JSON config file with defaults for anything missing
use crate::error::EngineError;
use crate::valuation::ShareCountPolicy;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Environment variable naming the engine's JSON config file.
pub const CONFIG_PATH_ENV: &str = "ENGINE_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    pub share_count_policy: ShareCountPolicy,
    /// Default tracing filter, used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "127.0.0.1".to_string(),
            port: 50051,
            share_count_policy: ShareCountPolicy::Strict,
            log_level: "info".to_string(),
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::ConfigError(format!("Invalid engine settings: {}", e)))
    }

    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded engine settings from file");
        Ok(settings)
    }

    /// Loads from `path` if given, otherwise from the file named by `ENGINE_CONFIG`,
    /// otherwise falls back to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, EngineError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(env_path) => Self::from_file(Path::new(&env_path)),
            None => Ok(Self::default()),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, EngineError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| EngineError::ConfigError(format!("Invalid listen address '{}:{}': {}", self.host, self.port, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings = EngineSettings::from_json(r#"{ "port": 6000 }"#).unwrap();
        assert_eq!(settings.port, 6000);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.share_count_policy, ShareCountPolicy::Strict);
    }

    #[test]
    fn test_share_count_policy_from_json() {
        let settings = EngineSettings::from_json(r#"{ "share_count_policy": "permissive" }"#).unwrap();
        assert_eq!(settings.share_count_policy, ShareCountPolicy::Permissive);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = EngineSettings::from_json(r#"{ "port": "not a port" }"#).unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "host": "0.0.0.0", "port": 7000, "log_level": "debug" }}"#).unwrap();
        file.flush().unwrap();

        let settings = EngineSettings::load(Some(file.path())).unwrap();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.socket_addr().unwrap().port(), 7000);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EngineSettings::load(Some(Path::new("no_such_engine_config.json"))).unwrap_err();
        assert!(matches!(err, EngineError::IoError { .. }));
    }

    #[test]
    fn test_bad_host_is_config_error() {
        let settings = EngineSettings {
            host: "not a host".to_string(),
            ..EngineSettings::default()
        };
        assert!(matches!(settings.socket_addr(), Err(EngineError::ConfigError(_))));
    }
}
