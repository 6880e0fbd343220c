//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `BASE_URL` - Public prefix for short URLs (default: `http://localhost:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_GENERATION_ATTEMPTS` - Codes drawn per creation before giving up
//!   (default: 5, range: 1-100)
//!
//! None of the variables are required.

use anyhow::Result;
use std::env;

use crate::application::services::link_service::DEFAULT_CODE_GENERATION_ATTEMPTS;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const MAX_CODE_GENERATION_ATTEMPTS: usize = 100;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix of every issued `short_url`, e.g. `https://s.example.com`.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on random draws when a generated code collides.
    pub code_generation_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            code_generation_attempts: DEFAULT_CODE_GENERATION_ATTEMPTS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_generation_attempts = env::var("CODE_GENERATION_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_GENERATION_ATTEMPTS);

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            code_generation_attempts,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `base_url` is not an HTTP(S) URL
    /// - `code_generation_attempts` is outside 1-100
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.code_generation_attempts == 0
            || self.code_generation_attempts > MAX_CODE_GENERATION_ATTEMPTS
        {
            anyhow::bail!(
                "CODE_GENERATION_ATTEMPTS must be between 1 and {}, got {}",
                MAX_CODE_GENERATION_ATTEMPTS,
                self.code_generation_attempts
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Code generation attempts: {}",
            self.code_generation_attempts
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "LISTEN",
        "BASE_URL",
        "RUST_LOG",
        "LOG_FORMAT",
        "CODE_GENERATION_ATTEMPTS",
    ];

    fn clear_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "5000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:5000".to_string();

        config.base_url = "localhost:5000".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://s.example.com".to_string();

        config.code_generation_attempts = 0;
        assert!(config.validate().is_err());

        config.code_generation_attempts = 101;
        assert!(config.validate().is_err());

        config.code_generation_attempts = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.code_generation_attempts, 5);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("BASE_URL", "https://s.example.com");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("CODE_GENERATION_ATTEMPTS", "8");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.base_url, "https://s.example.com");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.code_generation_attempts, 8);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_attempts_falls_back_to_default() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CODE_GENERATION_ATTEMPTS", "many");
        }

        let config = Config::from_env();
        assert_eq!(config.code_generation_attempts, 5);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_invalid_format() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
