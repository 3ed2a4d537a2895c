//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, TIMEZONE_LOCAL, TIMEZONE_UTC};

/// Time zone used to decide which calendar day "today" is.
///
/// Birthdates themselves are never converted; they are plain calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodayTimezone {
    #[default]
    Local,
    Utc,
}

impl TodayTimezone {
    /// Parse a configuration value, falling back to local time for unknown values.
    pub fn from_setting(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            TIMEZONE_UTC => TodayTimezone::Utc,
            TIMEZONE_LOCAL => TodayTimezone::Local,
            other => {
                tracing::warn!("Unknown TODAY_TIMEZONE '{}', using local time", other);
                TodayTimezone::Local
            }
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Where the default name is stored; `None` keeps it in memory only.
    pub preferences_path: Option<PathBuf>,
    pub today_timezone: TodayTimezone,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            preferences_path: None,
            today_timezone: TodayTimezone::Local,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            preferences_path: env::var("PREFERENCES_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            today_timezone: env::var("TODAY_TIMEZONE")
                .map(|v| TodayTimezone::from_setting(&v))
                .unwrap_or_default(),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
