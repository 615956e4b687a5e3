//! Session-scoped screening state.
//!
//! One `ScreeningSession` holds every mutable entity of a conversation.
//! A reset replaces the whole value; nothing carries over.

use serde::Serialize;

use crate::domain::foundation::{SessionId, StateMachine, ValidationError};

use super::interview::{AnswerRecord, Interview, QuestionSet};
use super::mood::{ConversationMood, SupportedLanguage};
use super::profile::{CandidateProfile, Difficulty};
use super::stage::Stage;
use super::transcript::Transcript;

/// All state owned by one screening conversation.
#[derive(Debug, Clone)]
pub struct ScreeningSession {
    id: SessionId,
    stage: Stage,
    profile: CandidateProfile,
    transcript: Transcript,
    interview: Option<Interview>,
    mood: ConversationMood,
    failure: Option<String>,
}

impl ScreeningSession {
    /// Creates an empty session whose language is seeded by the display preference.
    pub fn new(display_language: SupportedLanguage) -> Self {
        Self {
            id: SessionId::new(),
            stage: Stage::default(),
            profile: CandidateProfile::new(),
            transcript: Transcript::new(),
            interview: None,
            mood: ConversationMood::seeded(display_language),
            failure: None,
        }
    }

    /// Identifier minted when the session was created.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Current conversation stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Candidate details collected so far.
    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    pub(crate) fn profile_mut(&mut self) -> &mut CandidateProfile {
        &mut self.profile
    }

    /// Every turn exchanged, oldest first.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub(crate) fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    /// Interview state, present once questions were generated.
    pub fn interview(&self) -> Option<&Interview> {
        self.interview.as_ref()
    }

    /// Latest detected sentiment and language.
    pub fn mood(&self) -> &ConversationMood {
        &self.mood
    }

    /// Current language for assistant output.
    pub fn language(&self) -> &str {
        &self.mood.language
    }

    /// Error text from the last failed question generation.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// True once the conversation reached `Ended`.
    pub fn is_ended(&self) -> bool {
        self.stage == Stage::Ended
    }

    pub(crate) fn set_mood(&mut self, mood: ConversationMood) {
        self.mood = mood;
    }

    /// Overrides the language without touching the sentiment.
    pub(crate) fn set_language(&mut self, language: impl Into<String>) {
        self.mood.language = language.into();
    }

    /// Moves to `target` if the stage machine allows it.
    pub(crate) fn transition_to(&mut self, target: Stage) -> Result<(), ValidationError> {
        let next = self.stage.transition_to(target)?;
        tracing::debug!(session_id = %self.id, from = %self.stage, to = %next, "stage transition");
        self.stage = next;
        Ok(())
    }

    /// Moves one position along the linear order.
    pub(crate) fn advance(&mut self) -> Result<(), ValidationError> {
        let next = self.stage.next().ok_or_else(|| {
            ValidationError::invalid_format(
                "state_transition",
                format!("{:?} has no next stage", self.stage),
            )
        })?;
        self.transition_to(next)
    }

    /// Stores the generated questions and enters the interview.
    pub(crate) fn begin_interview(&mut self, questions: QuestionSet) -> Result<(), ValidationError> {
        self.transition_to(Stage::Interviewing)?;
        self.interview = Some(Interview::new(questions));
        Ok(())
    }

    /// Records a failed question generation.
    pub(crate) fn fail(&mut self, reason: impl Into<String>) -> Result<(), ValidationError> {
        self.transition_to(Stage::Failed)?;
        self.failure = Some(reason.into());
        Ok(())
    }

    /// Records an answer for the current question.
    pub(crate) fn record_answer(&mut self, record: AnswerRecord) -> Result<(), ValidationError> {
        match self.interview.as_mut() {
            Some(interview) => interview.record_answer(record),
            None => Err(ValidationError::invalid_format(
                "answers",
                "no interview in progress",
            )),
        }
    }

    /// Read-only view for presentation layers. Exposes only the mean score.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            stage: self.stage,
            progress_percent: self.stage.progress_percent(),
            profile: self.profile.clone(),
            difficulty: self.profile.difficulty(),
            mood: self.mood.clone(),
            question_count: self.interview.as_ref().map_or(0, |i| i.questions().len()),
            answered_count: self.interview.as_ref().map_or(0, Interview::answered_count),
            mean_score: self.interview.as_ref().and_then(Interview::mean_score),
        }
    }
}

/// Point-in-time view of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub stage: Stage,
    pub progress_percent: u8,
    pub profile: CandidateProfile,
    pub difficulty: Option<Difficulty>,
    pub mood: ConversationMood,
    pub question_count: usize,
    pub answered_count: usize,
    pub mean_score: Option<f64>,
}
