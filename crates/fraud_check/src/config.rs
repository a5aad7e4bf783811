// Rust guideline compliant 2026-10-16

//! Process configuration, read from the environment (and `.env` when present).
//!
//! | variable | default |
//! |---|---|
//! | `FRAUD_API_URL` | `http://127.0.0.1:8000` |
//! | `FRAUD_API_TIMEOUT_SECS` | `10` (`0` disables the bound) |
//! | `FRAUD_LOG_LEVEL` | `warn` |
//!
//! Command-line flags override these values.

use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors raised while reading the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `FRAUD_API_TIMEOUT_SECS` is not a whole number of seconds.
    #[error("FRAUD_API_TIMEOUT_SECS must be a whole number of seconds, got {value:?}")]
    InvalidTimeout {
        /// The rejected value.
        value: String,
    },
    /// The API URL does not use http or https.
    #[error("prediction service URL must start with http:// or https://, got {value:?}")]
    InvalidApiUrl {
        /// The rejected value.
        value: String,
    },
}

/// Settings for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the prediction service.
    pub api_url: String,
    /// Bound on one prediction call; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl AppConfig {
    /// Load `.env` if present, then read the `FRAUD_*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but unusable.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!(error = %err, "config.dotenv.skipped");
        }

        let api_url = env::var("FRAUD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let timeout = match env::var("FRAUD_API_TIMEOUT_SECS") {
            Ok(value) => parse_timeout(&value)?,
            Err(_) => Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };
        let log_level =
            env::var("FRAUD_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_owned());

        let config = Self { api_url, timeout, log_level };
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] for a non-HTTP URL.
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.starts_with("http://") || self.api_url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidApiUrl { value: self.api_url.clone() })
        }
    }
}

fn parse_timeout(value: &str) -> Result<Option<Duration>, ConfigError> {
    let secs = value
        .trim()
        .parse::<u64>()
        .map_err(|_parse| ConfigError::InvalidTimeout { value: value.to_owned() })?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        // SAFETY: tests touching the environment hold `env_guard`.
        unsafe {
            env::remove_var("FRAUD_API_URL");
            env::remove_var("FRAUD_API_TIMEOUT_SECS");
            env::remove_var("FRAUD_LOG_LEVEL");
        }
    }

    fn set(key: &str, value: &str) {
        // SAFETY: tests touching the environment hold `env_guard`.
        unsafe { env::set_var(key, value) };
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.api_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn load_reads_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        set("FRAUD_API_URL", "https://fraud.example.com");
        set("FRAUD_API_TIMEOUT_SECS", "0");
        set("FRAUD_LOG_LEVEL", "debug");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.api_url, "https://fraud.example.com");
        assert_eq!(config.timeout, None);
        assert_eq!(config.log_level, "debug");
        reset_env();
    }

    #[test]
    fn load_rejects_bad_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        set("FRAUD_API_TIMEOUT_SECS", "soon");
        let err = AppConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
        reset_env();
    }

    #[test]
    fn overrides_win_over_env() {
        let config = AppConfig {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: Some(Duration::from_secs(10)),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        };
        let config = config
            .with_overrides(Some("http://10.0.0.5:9000".to_owned()), Some(3))
            .unwrap();
        assert_eq!(config.api_url, "http://10.0.0.5:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn overrides_reject_non_http_url() {
        let config = AppConfig {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        };
        let err = config.with_overrides(Some("ftp://x".to_owned()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiUrl { .. }));
    }
}
