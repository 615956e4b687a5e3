//! Localization of assistant-authored messages.

use crate::application::prompts;
use crate::domain::foundation::SessionId;
use crate::domain::screening::is_english;

use super::language_service::LanguageService;

/// Translates English assistant messages into the candidate's language.
#[derive(Clone)]
pub struct Translator {
    language: LanguageService,
}

impl Translator {
    pub fn new(language: LanguageService) -> Self {
        Self { language }
    }

    /// Returns `text` in `target_language`.
    ///
    /// English targets return the input without any call. On failure, or an
    /// empty translation, the English text is returned unchanged.
    pub async fn translate(&self, session_id: SessionId, text: &str, target_language: &str) -> String {
        if is_english(target_language) {
            return text.to_string();
        }

        match self
            .language
            .complete(session_id, "translate", &prompts::translate(text, target_language))
            .await
        {
            Ok(translated) if !translated.is_empty() => translated,
            Ok(_) => text.to_string(),
            Err(e) => {
                tracing::warn!(%session_id, error = %e, target_language, "translation unavailable, sending English");
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use std::sync::Arc;

    fn translator(provider: &MockAIProvider) -> Translator {
        Translator::new(LanguageService::new(Arc::new(provider.clone())))
    }

    #[tokio::test]
    async fn english_passes_through_without_calls() {
        let provider = MockAIProvider::new();
        let text = translator(&provider)
            .translate(SessionId::new(), "Hello there", "English")
            .await;
        assert_eq!(text, "Hello there");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn other_languages_use_the_service() {
        let provider = MockAIProvider::new().with_response(" Hola \n");
        let text = translator(&provider)
            .translate(SessionId::new(), "Hello", "Spanish")
            .await;
        assert_eq!(text, "Hola");
        assert_eq!(provider.calls_matching("to Spanish"), 1);
    }

    #[tokio::test]
    async fn failure_returns_original_text() {
        let provider = MockAIProvider::new().with_error(MockError::Network {
            message: "reset".into(),
        });
        let text = translator(&provider)
            .translate(SessionId::new(), "Hello", "German")
            .await;
        assert_eq!(text, "Hello");
    }

    #[tokio::test]
    async fn empty_translation_returns_original_text() {
        let provider = MockAIProvider::new().with_response("   ");
        let text = translator(&provider)
            .translate(SessionId::new(), "Hello", "Hindi")
            .await;
        assert_eq!(text, "Hello");
    }
}
