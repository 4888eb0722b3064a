//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! ## Server
//! - `RATING_HOST` - Bind address (default: 127.0.0.1)
//! - `RATING_PORT` - Listen port (default: 3000)
//! - `RATING_BASE_URL` - Public URL (default: `http://localhost:3000`).
//!   An `https://` URL turns on secure session cookies.
//! - `RATING_LOG_JSON` - Emit JSON logs instead of text when set
//!
//! ## Mock backend
//! - `MOCK_FETCH_DELAY_MS` - Delay before list fetches resolve (default: 1000)
//! - `MOCK_STATS_DELAY_MS` - Delay before platform stats resolve (default: 500)
//! - `MOCK_SUBMIT_DELAY_MS` - Delay before form submissions resolve (default: 1000)
//! - `MOCK_FAILURE_RATE` - Probability in 0..=1 that a submission fails (default: 0)
//!
//! ## Error tracking
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 1.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::services::mock_api::MockSettings;

const DEFAULT_FETCH_DELAY_MS: &str = "1000";
const DEFAULT_STATS_DELAY_MS: &str = "500";
const DEFAULT_SUBMIT_DELAY_MS: &str = "1000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct RatingConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL
    pub base_url: String,
    /// Delays and failure rate of the mock backend
    pub mock: MockSettings,
    /// Whether logs are written as JSON
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            mock: MockSettings::default(),
            log_json: false,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        }
    }
}

impl RatingConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that does not
    /// parse or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env::<IpAddr>("RATING_HOST", "127.0.0.1")?;
        let port = parse_env::<u16>("RATING_PORT", "3000")?;
        let base_url = get_env_or_default("RATING_BASE_URL", "http://localhost:3000");
        let mock = MockSettings {
            fetch_delay: get_delay("MOCK_FETCH_DELAY_MS", DEFAULT_FETCH_DELAY_MS)?,
            stats_delay: get_delay("MOCK_STATS_DELAY_MS", DEFAULT_STATS_DELAY_MS)?,
            submit_delay: get_delay("MOCK_SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY_MS)?,
            failure_rate: get_failure_rate("MOCK_FAILURE_RATE")?,
        };
        let log_json = get_optional_env("RATING_LOG_JSON").is_some();
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            base_url,
            mock,
            log_json,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Read a delay in milliseconds.
fn get_delay(key: &str, default: &str) -> Result<Duration, ConfigError> {
    parse_env::<u64>(key, default).map(Duration::from_millis)
}

/// Read a probability, which must lie within 0..=1.
fn get_failure_rate(key: &str) -> Result<f64, ConfigError> {
    get_optional_env(key).map_or(Ok(0.0), |value| parse_failure_rate(key, &value))
}

fn parse_failure_rate(key: &str, value: &str) -> Result<f64, ConfigError> {
    let rate = parse_value::<f64>(key, value)?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0 and 1 (got {rate})"),
        ));
    }
    Ok(rate)
}
