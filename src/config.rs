//! Configuration handling for pebcaw
//!
//! Settings come from an optional TOML file, then command-line flags on
//! top. Every key is optional in the file:
//!
//! ```toml
//! interval_secs = 300
//! warn_flagged_country = true
//! display = false
//! restart_regularly = false
//! restart_after_secs = 500
//! countries_whitelist = ["CH", "IS"]
//! endpoint = "https://ipinfo.io/json"
//! request_timeout_secs = 30
//! icon = "/usr/share/icons/hicolor/48x48/status/dialog-warning.png"
//! ```

use crate::classify::{ClassifyOptions, normalize_country};
use crate::geo::DEFAULT_ENDPOINT;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Gap between the start of one observation and the next
    pub interval_secs: u64,
    pub warn_flagged_country: bool,
    pub display: bool,
    pub restart_regularly: bool,
    pub restart_after_secs: u64,
    pub countries_whitelist: Vec<String>,
    pub endpoint: String,
    pub request_timeout_secs: u64,
    pub icon: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_secs: 300,
            warn_flagged_country: false,
            display: false,
            restart_regularly: false,
            restart_after_secs: 500,
            countries_whitelist: Vec::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 30,
            icon: None,
        }
    }
}

/// Values given on the command line
///
/// Switches can only turn a feature on; they never disable something the
/// config file enabled.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub interval_secs: Option<u64>,
    pub warn_flagged_country: bool,
    pub display: bool,
    pub restart_regularly: bool,
    pub restart_after_secs: Option<u64>,
    /// Comma-separated country codes
    pub countries_whitelist: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Default location, `<config dir>/pebcaw/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pebcaw").join("config.toml"))
    }

    /// Load the explicit path if given, else the default path if present,
    /// else built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(interval) = overrides.interval_secs {
            self.interval_secs = interval;
        }
        if let Some(restart_after) = overrides.restart_after_secs {
            self.restart_after_secs = restart_after;
        }
        if let Some(list) = overrides.countries_whitelist {
            self.countries_whitelist = list.split(',').map(str::to_string).collect();
        }
        self.warn_flagged_country |= overrides.warn_flagged_country;
        self.display |= overrides.display;
        self.restart_regularly |= overrides.restart_regularly;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_secs == 0 {
            return Err(ConfigError::Invalid("interval must be at least 1 second".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request timeout must be at least 1 second".to_string(),
            ));
        }

        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::Invalid(format!("endpoint {}: {}", self.endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "endpoint {} must use http or https",
                self.endpoint
            )));
        }

        Ok(())
    }

    /// Whitelisted country codes, trimmed and upper-cased
    pub fn whitelist(&self) -> BTreeSet<String> {
        self.countries_whitelist
            .iter()
            .map(|code| normalize_country(code))
            .filter(|code| !code.is_empty())
            .collect()
    }

    pub fn classify_options(&self) -> ClassifyOptions {
        let whitelist = self.whitelist();
        ClassifyOptions {
            warn_flagged_country: self.warn_flagged_country,
            country_whitelist: (!whitelist.is_empty()).then_some(whitelist),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn restart_after(&self) -> Duration {
        Duration::from_secs(self.restart_after_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
