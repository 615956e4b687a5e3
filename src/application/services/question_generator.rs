//! Tailored question generation from the completed profile.

use serde::Deserialize;

use crate::application::{messages, prompts};
use crate::domain::foundation::ValidationError;
use crate::domain::screening::{Difficulty, QuestionSet, ScreeningSession};
use crate::ports::AIError;

use super::language_service::LanguageService;
use super::translator::Translator;

/// Expected shape of the question-generation reply.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionsResponse {
    questions: Vec<String>,
}

/// Requests a difficulty-scaled question set. Runs without user input.
#[derive(Clone)]
pub struct QuestionGenerator {
    language: LanguageService,
    translator: Translator,
}

impl QuestionGenerator {
    pub fn new(language: LanguageService, translator: Translator) -> Self {
        Self { language, translator }
    }

    /// Generates the questions and enters the interview, or moves the
    /// session to the failed stage with the error shown to the candidate.
    ///
    /// There is no automatic retry.
    pub async fn run(&self, session: &mut ScreeningSession) -> Result<(), ValidationError> {
        let difficulty = session.profile().difficulty().unwrap_or(Difficulty::Basic);
        let prompt = prompts::questions(session.profile(), difficulty, session.language());

        match self.generate(session, &prompt).await {
            Ok(questions) => {
                let count = questions.len();
                tracing::info!(session_id = %session.id(), count, %difficulty, "questions generated");
                session.begin_interview(questions)?;
                let ready = self
                    .translator
                    .translate(session.id(), &messages::questions_ready(count), session.language())
                    .await;
                session.transcript_mut().push_assistant(ready);
            }
            Err(e) => {
                tracing::warn!(session_id = %session.id(), error = %e, "question generation failed");
                let reason = e.to_string();
                session.fail(reason.clone())?;
                let notice = self
                    .translator
                    .translate(session.id(), &messages::generation_failed(&reason), session.language())
                    .await;
                session.transcript_mut().push_assistant(notice);
            }
        }
        Ok(())
    }

    async fn generate(
        &self,
        session: &ScreeningSession,
        prompt: &str,
    ) -> Result<QuestionSet, AIError> {
        let response: QuestionsResponse = self
            .language
            .complete_json(session.id(), "questions", prompt)
            .await?;
        QuestionSet::new(response.questions).map_err(|e| AIError::schema_mismatch(e.to_string()))
    }
}
