//! Question presentation and answer scoring.

use serde::Deserialize;

use crate::application::{messages, prompts};
use crate::domain::foundation::{SessionId, ValidationError};
use crate::domain::screening::{AnswerRecord, ScoreTriple, ScreeningSession, Stage};
use crate::ports::AIError;

use super::language_service::LanguageService;
use super::translator::Translator;

/// Expected shape of the scoring reply.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScoreResponse {
    clarity: u8,
    technical_accuracy: u8,
    depth: u8,
}

/// Scores one answer, retrying transient failures up to a fixed budget.
#[derive(Clone)]
pub struct AnswerEvaluator {
    language: LanguageService,
    attempts: u32,
}

impl AnswerEvaluator {
    /// `attempts` is clamped to at least one call.
    pub fn new(language: LanguageService, attempts: u32) -> Self {
        Self {
            language,
            attempts: attempts.max(1),
        }
    }

    pub async fn score(
        &self,
        session_id: SessionId,
        candidate: &str,
        question: &str,
        answer: &str,
    ) -> Result<ScoreTriple, AIError> {
        let prompt = prompts::evaluate(candidate, question, answer);
        let mut attempt = 1;
        loop {
            match self.score_once(session_id, &prompt).await {
                Ok(score) => return Ok(score),
                Err(e) if e.is_retryable() && attempt < self.attempts => {
                    tracing::warn!(%session_id, attempt, error = %e, "answer scoring failed, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn score_once(&self, session_id: SessionId, prompt: &str) -> Result<ScoreTriple, AIError> {
        let reply: ScoreResponse = self.language.complete_json(session_id, "evaluate", prompt).await?;
        ScoreTriple::new(reply.clarity, reply.technical_accuracy, reply.depth)
            .map_err(|e| AIError::schema_mismatch(e.to_string()))
    }
}

/// Drives the interview stage: one question out, one answer in.
#[derive(Clone)]
pub struct InterviewLoop {
    evaluator: AnswerEvaluator,
    language: LanguageService,
    translator: Translator,
}

impl InterviewLoop {
    pub fn new(evaluator: AnswerEvaluator, language: LanguageService, translator: Translator) -> Self {
        Self {
            evaluator,
            language,
            translator,
        }
    }

    /// Auto-advance step. Presents the current question unless it is already
    /// the last transcript entry, or moves to reporting once every question
    /// has an answer. Returns whether anything changed.
    pub fn present(&self, session: &mut ScreeningSession) -> Result<bool, ValidationError> {
        let interview = session
            .interview()
            .ok_or_else(|| ValidationError::invalid_format("questions", "no interview in progress"))?;

        let question = match interview.current_question().map(str::to_string) {
            Some(question) => question,
            None => {
                session.transition_to(Stage::Reporting)?;
                return Ok(true);
            }
        };

        if session.transcript().last().is_some_and(|turn| turn.text == question) {
            return Ok(false);
        }
        session.transcript_mut().push_assistant(question);
        Ok(true)
    }

    /// Scores `answer` against the current question and advances the cursor.
    ///
    /// A scoring failure records the minimum score and shows a notice; the
    /// interview moves on either way.
    pub async fn handle_answer(
        &self,
        session: &mut ScreeningSession,
        answer: &str,
    ) -> Result<(), ValidationError> {
        let question = session
            .interview()
            .and_then(|interview| interview.current_question())
            .map(str::to_string)
            .ok_or_else(|| ValidationError::invalid_format("questions", "no question awaiting an answer"))?;
        let candidate = session.profile().display_name().to_string();

        match self
            .evaluator
            .score(session.id(), &candidate, &question, answer)
            .await
        {
            Ok(score) => {
                tracing::debug!(session_id = %session.id(), "answer scored");
                session.record_answer(AnswerRecord::scored(answer, score))?;
                let ack = self.acknowledge(session, &candidate).await;
                session.transcript_mut().push_assistant(ack);
            }
            Err(e) => {
                tracing::warn!(session_id = %session.id(), error = %e, "answer scoring unavailable, recording minimum score");
                session.record_answer(AnswerRecord::unscored(answer))?;
                let notice = self
                    .translator
                    .translate(session.id(), messages::SCORING_GLITCH, session.language())
                    .await;
                session.transcript_mut().push_assistant(notice);
            }
        }
        Ok(())
    }

    async fn acknowledge(&self, session: &ScreeningSession, candidate: &str) -> String {
        let prompt = prompts::acknowledge(candidate, session.language());
        match self.language.complete(session.id(), "acknowledge", &prompt).await {
            Ok(text) if !text.is_empty() => text,
            result => {
                if let Err(e) = result {
                    tracing::warn!(session_id = %session.id(), error = %e, "acknowledgment unavailable");
                }
                self.translator
                    .translate(session.id(), messages::ACKNOWLEDGE_FALLBACK, session.language())
                    .await
            }
        }
    }
}
