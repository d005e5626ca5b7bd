//! Runtime configuration, read from a TOML file.
//!
//! ```toml
//! subreddit = "curiosityrover"
//! poll_interval_secs = 30
//! tt_minus_utc_seconds = 69.184
//! log_level = "info"
//!
//! [markers]
//! start = "[](#edit_start)"
//! end = "[](#edit_stop)"
//!
//! [publisher]
//! user_agent = "marsclock sidebar updater"
//! access_token = "..."
//! ```
//!
//! Every key is optional. The access token can also be supplied through the
//! `MARSCLOCK_ACCESS_TOKEN` environment variable, which takes precedence.
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TT_MINUS_UTC;
use crate::marsclock_errors::MarsClockError;
use crate::patch::Markers;
use crate::time::TimeConfig;

pub const ACCESS_TOKEN_ENV: &str = "MARSCLOCK_ACCESS_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_subreddit")]
    pub subreddit: String,

    #[serde(default)]
    pub markers: Markers,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_tt_minus_utc_seconds")]
    pub tt_minus_utc_seconds: f64,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub publisher: PublisherConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub access_token: String,

    #[serde(default = "default_wiki_page")]
    pub wiki_page: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_subreddit() -> String {
    "curiosityrover".to_string()
}

fn default_poll_interval_secs() -> u64 {
    30
}

fn default_tt_minus_utc_seconds() -> f64 {
    DEFAULT_TT_MINUS_UTC
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_base() -> String {
    "https://oauth.reddit.com".to_string()
}

fn default_user_agent() -> String {
    "marsclock sidebar updater".to_string()
}

fn default_wiki_page() -> String {
    "config/sidebar".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subreddit: default_subreddit(),
            markers: Markers::default(),
            poll_interval_secs: default_poll_interval_secs(),
            tt_minus_utc_seconds: default_tt_minus_utc_seconds(),
            log_level: default_log_level(),
            publisher: PublisherConfig::default(),
        }
    }
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            user_agent: default_user_agent(),
            access_token: String::new(),
            wiki_page: default_wiki_page(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FromStr for Config {
    type Err = MarsClockError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Read, parse and validate a configuration file, then apply
    /// environment overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MarsClockError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = content.parse()?;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
            if !token.is_empty() {
                self.publisher.access_token = token;
            }
        }
    }

    pub fn validate(&self) -> Result<(), MarsClockError> {
        if self.subreddit.trim().is_empty() {
            return Err(MarsClockError::Config("subreddit must not be empty".into()));
        }
        if self.markers.start.is_empty() || self.markers.end.is_empty() {
            return Err(MarsClockError::Config("markers must not be empty".into()));
        }
        if self.poll_interval_secs == 0 {
            return Err(MarsClockError::Config(
                "poll_interval_secs must be positive".into(),
            ));
        }
        if !self.tt_minus_utc_seconds.is_finite() {
            return Err(MarsClockError::Config(
                "tt_minus_utc_seconds must be finite".into(),
            ));
        }
        Ok(())
    }

    pub fn time_config(&self) -> TimeConfig {
        TimeConfig::new(self.tt_minus_utc_seconds)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
