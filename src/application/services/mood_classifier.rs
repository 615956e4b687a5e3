//! Sentiment and language classification of candidate messages.

use crate::domain::foundation::SessionId;
use crate::domain::screening::{ConversationMood, Sentiment};

use super::language_service::LanguageService;

/// Infers the candidate's tone and language from their latest message.
#[derive(Clone)]
pub struct MoodClassifier {
    language: LanguageService,
}

impl MoodClassifier {
    pub fn new(language: LanguageService) -> Self {
        Self { language }
    }

    /// Classifies `text`, falling back to neutral sentiment and the previous
    /// language when the call fails or the reply is malformed.
    pub async fn classify(
        &self,
        session_id: SessionId,
        text: &str,
        previous: &ConversationMood,
    ) -> ConversationMood {
        let fallback = || ConversationMood::new(Sentiment::Neutral, previous.language.clone());

        let metadata = match self.language.extract_metadata(session_id, text).await {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!(%session_id, error = %e, "mood detection unavailable, using defaults");
                return fallback();
            }
        };

        let language = metadata.language.trim();
        match metadata.sentiment.parse::<Sentiment>() {
            Ok(sentiment) if !language.is_empty() => ConversationMood::new(sentiment, language),
            _ => {
                tracing::warn!(%session_id, "mood detection returned invalid values, using defaults");
                fallback()
            }
        }
    }
}
