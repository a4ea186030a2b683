//! Dashboard configuration file support.
//!
//! Configuration is read from a TOML file and then selectively overridden by
//! environment variables. Every section and field has a default, so an absent
//! file or a partial file is valid.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::io::DEFAULT_SHEET;
use crate::routes::ranking::DEFAULT_RANKING_LIMIT;
use crate::routes::timeline::DEFAULT_CUTOFF_YEAR;
use crate::services::dashboard::{DashboardSettings, DEFAULT_YEAR};
use crate::services::selection::{
    SessionLimits, DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_IDLE_TIMEOUT,
};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "DASHBOARD_CONFIG";

const CONFIG_FILE_NAME: &str = "dashboard.toml";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value '{value}' for environment variable {var}")]
    InvalidEnv { var: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub dashboard: PipelineSettings,
    #[serde(default)]
    pub sessions: SessionSettings,
}

/// Bind address of the HTTP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Location of the event spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    #[serde(default = "default_sheet")]
    pub sheet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSettings {
    #[serde(default = "default_cutoff_year")]
    pub cutoff_year: i32,
    #[serde(default = "default_ranking_limit")]
    pub ranking_limit: usize,
    #[serde(default = "default_year")]
    pub default_year: i32,
}

/// Bounds on map selection sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/emdat.xlsx")
}

fn default_sheet() -> String {
    DEFAULT_SHEET.to_string()
}

fn default_cutoff_year() -> i32 {
    DEFAULT_CUTOFF_YEAR
}

fn default_ranking_limit() -> usize {
    DEFAULT_RANKING_LIMIT
}

fn default_year() -> i32 {
    DEFAULT_YEAR
}

fn default_idle_timeout_secs() -> u64 {
    DEFAULT_SESSION_IDLE_TIMEOUT.as_secs()
}

fn default_max_sessions() -> usize {
    DEFAULT_MAX_SESSIONS
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            sheet: default_sheet(),
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            cutoff_year: default_cutoff_year(),
            ranking_limit: default_ranking_limit(),
            default_year: default_year(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout_secs(),
            max_sessions: default_max_sessions(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists in any of them.
    pub fn from_default_location() -> ConfigResult<Option<Self>> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration file {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Resolve the effective configuration.
    ///
    /// `DASHBOARD_CONFIG` names an explicit file; otherwise the default
    /// locations are searched, and built-in defaults apply if none exists.
    /// Environment overrides are applied last.
    ///
    /// # Environment Variables
    /// - `HOST`, `PORT`: server bind address
    /// - `DATA_PATH`, `DATA_SHEET`: spreadsheet location
    pub fn load() -> ConfigResult<Self> {
        let config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::from_default_location()?.unwrap_or_default(),
        };
        config.with_env_overrides()
    }

    /// Apply `HOST`, `PORT`, `DATA_PATH` and `DATA_SHEET` when set.
    pub fn with_env_overrides(mut self) -> ConfigResult<Self> {
        if let Some(host) = env_value("HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_value("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { var: "PORT", value: port })?;
        }
        if let Some(path) = env_value("DATA_PATH") {
            self.data.path = PathBuf::from(path);
        }
        if let Some(sheet) = env_value("DATA_SHEET") {
            self.data.sheet = sheet;
        }
        Ok(self)
    }

    /// Socket address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Pipeline tunables for the service layer.
    pub fn settings(&self) -> DashboardSettings {
        DashboardSettings {
            cutoff_year: self.dashboard.cutoff_year,
            ranking_limit: self.dashboard.ranking_limit,
            default_year: self.dashboard.default_year,
            current_year: None,
        }
    }

    /// Bounds for the selection store.
    pub fn session_limits(&self) -> SessionLimits {
        SessionLimits {
            idle_timeout: Duration::from_secs(self.sessions.idle_timeout_secs),
            max_sessions: self.sessions.max_sessions,
        }
    }
}

fn env_value(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8050");
        assert_eq!(config.data.sheet, "EM-DAT Data (Original)");
        assert_eq!(config.dashboard.cutoff_year, 2000);
        assert_eq!(config.dashboard.ranking_limit, 7);
        assert_eq!(config.dashboard.default_year, 2020);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[server]
port = 9000

[dashboard]
ranking_limit = 10
"#;
        let config = DashboardConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.dashboard.ranking_limit, 10);
        assert_eq!(config.dashboard.cutoff_year, 2000);
        assert_eq!(config.data, DataSettings::default());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(DashboardConfig::from_toml_str("[server]\nport = \"high\"").is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let err = DashboardConfig::from_file("/nonexistent/dashboard.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/dashboard.toml"));
    }

    #[test]
    fn test_settings_conversion() {
        let mut config = DashboardConfig::default();
        config.dashboard.cutoff_year = 1990;
        let settings = config.settings();
        assert_eq!(settings.cutoff_year, 1990);
        assert_eq!(settings.ranking_limit, 7);
        assert_eq!(settings.current_year, None);
    }

    #[test]
    fn test_session_limits() {
        let limits = DashboardConfig::default().session_limits();
        assert_eq!(limits, SessionLimits::default());

        let toml = "[sessions]\nidle_timeout_secs = 300\n";
        let limits = DashboardConfig::from_toml_str(toml).unwrap().session_limits();
        assert_eq!(limits.idle_timeout, Duration::from_secs(300));
        assert_eq!(limits.max_sessions, DEFAULT_MAX_SESSIONS);
    }
}
