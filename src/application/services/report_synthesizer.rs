//! Closing summary once the interview is complete.

use crate::application::{messages, prompts};
use crate::domain::foundation::ValidationError;
use crate::domain::screening::{round_score, ScreeningSession, Stage, MIN_SCORE};

use super::language_service::LanguageService;
use super::translator::Translator;

/// Aggregates the scores and writes the closing message.
#[derive(Clone)]
pub struct ReportSynthesizer {
    language: LanguageService,
    translator: Translator,
}

impl ReportSynthesizer {
    pub fn new(language: LanguageService, translator: Translator) -> Self {
        Self { language, translator }
    }

    /// Appends the closing summary and ends the conversation.
    ///
    /// Only the mean score is disclosed. A failed call falls back to a
    /// locally built closing message.
    pub async fn run(&self, session: &mut ScreeningSession) -> Result<(), ValidationError> {
        let average = session
            .interview()
            .and_then(|interview| interview.mean_score())
            .map_or(f64::from(MIN_SCORE), round_score);
        let candidate = session.profile().display_name().to_string();
        let prompt = prompts::report(&candidate, session.language(), average);

        let summary = match self.language.complete(session.id(), "report", &prompt).await {
            Ok(text) if !text.is_empty() => text,
            result => {
                if let Err(e) = result {
                    tracing::warn!(session_id = %session.id(), error = %e, "report unavailable, using closing template");
                }
                self.translator
                    .translate(
                        session.id(),
                        &messages::closing_fallback(&candidate, average),
                        session.language(),
                    )
                    .await
            }
        };

        session.transcript_mut().push_assistant(summary);
        session.transition_to(Stage::Ended)?;
        tracing::info!(session_id = %session.id(), average, "screening complete");
        Ok(())
    }
}
