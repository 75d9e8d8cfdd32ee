//! Configuration types for user-reports
//!
//! Every field has a default, so an empty JSON object (or no config file at
//! all) yields a working configuration that pages through the public GoRest
//! users endpoint 100 records at a time.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Largest page size the users API accepts
pub const MAX_PER_PAGE: u32 = 100;

/// Users API settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Users endpoint; `page` and `per_page` are appended as query parameters
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Records requested per page (default: 100, the API maximum)
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Per-request timeout (default: 30 seconds)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            per_page: default_per_page(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Order in which the domain suffix report lists its rows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixOrder {
    /// Ascending by suffix text (default)
    #[default]
    Alphabetical,
    /// Highest count first; equal counts fall back to ascending suffix text
    CountDescending,
}

impl FromStr for SuffixOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabetical" => Ok(SuffixOrder::Alphabetical),
            "count_descending" | "count-descending" => Ok(SuffixOrder::CountDescending),
            other => Err(format!(
                "unknown suffix order '{other}' (expected 'alphabetical' or 'count-descending')"
            )),
        }
    }
}

/// Report output settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Row order for the domain suffix report
    #[serde(default)]
    pub suffix_order: SuffixOrder,
}

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Users API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Report output settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load a configuration from a JSON file
    ///
    /// Missing keys take their defaults. The result is validated before it is
    /// returned.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid JSON, or fails
    /// [`Config::validate`].
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that settings are usable
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.api.per_page == 0 || self.api.per_page > MAX_PER_PAGE {
            return Err(Error::config(
                "per_page",
                format!(
                    "per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                    self.api.per_page
                ),
            ));
        }

        if self.api.timeout.is_zero() {
            return Err(Error::config("timeout", "timeout must be at least 1 second"));
        }

        self.api.endpoint().map(|_| ())
    }
}

impl ApiConfig {
    /// Parse `base_url`, accepting only http and https
    ///
    /// # Errors
    /// Returns [`Error::Config`] for unparseable URLs or other schemes.
    pub fn endpoint(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            Error::config("base_url", format!("invalid URL '{}': {e}", self.base_url))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::config(
                "base_url",
                format!("unsupported URL scheme '{scheme}' (expected http or https)"),
            )),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://gorest.co.in/public/v2/users".to_string()
}

fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    concat!("user-reports/", env!("CARGO_PKG_VERSION")).to_string()
}

// Durations are written as whole seconds
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
