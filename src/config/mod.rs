//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `TALENT_SCOUT` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use talent_scout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Using model {}", config.ai.model);
//! ```

mod ai;
mod error;
mod screening;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use screening::ScreeningConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Language capability configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Conversation preferences
    #[serde(default)]
    pub screening: ScreeningConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TALENT_SCOUT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TALENT_SCOUT__AI__API_KEY=gsk_...` -> `ai.api_key = gsk_...`
    /// - `TALENT_SCOUT__SCREENING__DISPLAY_LANGUAGE=Spanish` -> `screening.display_language = Spanish`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TALENT_SCOUT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` on a missing API key, a zero timeout, a
    /// malformed base URL, or a zero scoring retry budget.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.screening.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screening::SupportedLanguage;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "TALENT_SCOUT__AI__API_KEY",
        "TALENT_SCOUT__AI__MODEL",
        "TALENT_SCOUT__AI__TIMEOUT_SECS",
        "TALENT_SCOUT__SCREENING__DISPLAY_LANGUAGE",
        "TALENT_SCOUT__SCREENING__EVALUATION_ATTEMPTS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("TALENT_SCOUT__AI__API_KEY", "gsk_test");
        env::set_var("TALENT_SCOUT__AI__MODEL", "llama-3.1-8b-instant");
        env::set_var("TALENT_SCOUT__SCREENING__DISPLAY_LANGUAGE", "Spanish");
        env::set_var("TALENT_SCOUT__SCREENING__EVALUATION_ATTEMPTS", "3");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.ai.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.ai.model, "llama-3.1-8b-instant");
        assert_eq!(config.screening.display_language, SupportedLanguage::Spanish);
        assert_eq!(config.screening.evaluation_attempts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("TALENT_SCOUT__AI__API_KEY", "gsk_test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.timeout_secs, 60);
        assert_eq!(config.screening.display_language, SupportedLanguage::English);
        assert_eq!(config.screening.evaluation_attempts, 2);
    }

    #[test]
    fn test_validate_requires_api_key() {
        let config = AppConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut config = AppConfig::default();
        config.ai.api_key = Some("gsk_test".to_string());
        config.screening.evaluation_attempts = 0;
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidEvaluationAttempts)
        );
    }
}
