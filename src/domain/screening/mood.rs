//! Candidate mood: detected sentiment and spoken language.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Emotional tone inferred from the latest candidate message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Concerned,
    Confident,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Concerned => "Concerned",
            Self::Confident => "Confident",
        }
    }
}

impl FromStr for Sentiment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "concerned" => Ok(Self::Concerned),
            "confident" => Ok(Self::Confident),
            other => Err(ValidationError::invalid_format(
                "sentiment",
                format!("unknown sentiment '{}'", other),
            )),
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display languages the candidate can pick explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SupportedLanguage {
    #[default]
    English,
    Spanish,
    French,
    German,
    Hindi,
    Chinese,
    Japanese,
}

impl SupportedLanguage {
    pub const ALL: [SupportedLanguage; 7] = [
        Self::English,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Hindi,
        Self::Chinese,
        Self::Japanese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Hindi => "Hindi",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
        }
    }
}

impl FromStr for SupportedLanguage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "display_language",
                    format!("unsupported language '{}'", s.trim()),
                )
            })
    }
}

impl std::fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if a free-text language name means English.
pub fn is_english(language: &str) -> bool {
    language.trim().eq_ignore_ascii_case(SupportedLanguage::English.as_str())
}

/// Latest detected tone and language. Overwritten every turn; no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMood {
    pub sentiment: Sentiment,
    /// Free-text language name, e.g. "Spanish".
    pub language: String,
}

impl ConversationMood {
    pub fn new(sentiment: Sentiment, language: impl Into<String>) -> Self {
        Self {
            sentiment,
            language: language.into(),
        }
    }

    /// Neutral mood seeded from the display-language preference.
    pub fn seeded(language: SupportedLanguage) -> Self {
        Self::new(Sentiment::Neutral, language.as_str())
    }
}

impl Default for ConversationMood {
    fn default() -> Self {
        Self::seeded(SupportedLanguage::default())
    }
}
