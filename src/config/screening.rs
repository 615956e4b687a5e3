//! Conversation preferences

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::ScreeningSettings;
use crate::domain::screening::SupportedLanguage;

/// Screening conversation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScreeningConfig {
    /// Language the conversation starts in
    #[serde(default)]
    pub display_language: SupportedLanguage,

    /// Scoring calls allowed per answer
    #[serde(default = "default_evaluation_attempts")]
    pub evaluation_attempts: u32,
}

impl ScreeningConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.evaluation_attempts == 0 {
            return Err(ValidationError::InvalidEvaluationAttempts);
        }
        Ok(())
    }

    pub fn settings(&self) -> ScreeningSettings {
        ScreeningSettings {
            display_language: self.display_language,
            evaluation_attempts: self.evaluation_attempts,
        }
    }
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            display_language: SupportedLanguage::default(),
            evaluation_attempts: default_evaluation_attempts(),
        }
    }
}

fn default_evaluation_attempts() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screening_defaults() {
        let config = ScreeningConfig::default();
        assert_eq!(config.display_language, SupportedLanguage::English);
        assert_eq!(config.evaluation_attempts, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = ScreeningConfig {
            evaluation_attempts: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidEvaluationAttempts)
        );
    }

    #[test]
    fn test_settings_mirror_config() {
        let config = ScreeningConfig {
            display_language: SupportedLanguage::Japanese,
            evaluation_attempts: 4,
        };
        let settings = config.settings();
        assert_eq!(settings.display_language, SupportedLanguage::Japanese);
        assert_eq!(settings.evaluation_attempts, 4);
    }
}
