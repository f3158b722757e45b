use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Scores must be strictly above this to count as a match.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.4;

pub const DEFAULT_EXIT_DELAY_MS: u64 = 2000;

pub const FAQ_PATH_ENV: &str = "FAQBOT_FAQ_PATH";
pub const THRESHOLD_ENV: &str = "FAQBOT_THRESHOLD";
pub const EXIT_DELAY_ENV: &str = "FAQBOT_EXIT_DELAY_MS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid similarity threshold {0:?}; expected a number between 0 and 1")]
    InvalidThreshold(String),
    #[error("invalid exit delay {0:?}; expected milliseconds")]
    InvalidDelay(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub faq_path: Option<PathBuf>,
    pub similarity_threshold: f64,
    pub exit_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            faq_path: None,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            exit_delay: Duration::from_millis(DEFAULT_EXIT_DELAY_MS),
        }
    }
}

impl Config {
    /// Read `.env` if present, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let faq_path = lookup(FAQ_PATH_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let similarity_threshold = match lookup(THRESHOLD_ENV) {
            Some(raw) => parse_threshold(&raw)?,
            None => defaults.similarity_threshold,
        };
        let exit_delay = match lookup(EXIT_DELAY_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDelay(raw))?,
            None => defaults.exit_delay,
        };
        Ok(Self {
            faq_path,
            similarity_threshold,
            exit_delay,
        })
    }

    pub fn with_faq_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.faq_path = path;
        }
        self
    }

    pub fn with_threshold(mut self, threshold: Option<f64>) -> Result<Self, ConfigError> {
        if let Some(value) = threshold {
            self.similarity_threshold = validate_threshold(value)
                .ok_or_else(|| ConfigError::InvalidThreshold(value.to_string()))?;
        }
        Ok(self)
    }
}

pub fn parse_threshold(raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(validate_threshold)
        .ok_or_else(|| ConfigError::InvalidThreshold(raw.to_string()))
}

fn validate_threshold(value: f64) -> Option<f64> {
    (value.is_finite() && (0.0..=1.0).contains(&value)).then_some(value)
}
