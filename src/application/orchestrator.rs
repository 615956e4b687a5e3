//! Screening orchestrator - the conversation state machine.
//!
//! Owns one `ScreeningSession` and routes every user turn: exit check first,
//! then the handler for the current stage, then the auto-advance driver.
//! `submit_turn` takes `&mut self`, so a turn and its nested calls always
//! finish before the next turn is accepted.

use std::sync::Arc;

use crate::domain::screening::{
    is_exit_request, ConversationTurn, ScreeningError, ScreeningSession, SessionSnapshot, Stage,
    SupportedLanguage, Transcript, FAREWELL_MESSAGE,
};
use crate::ports::AIProvider;

use super::messages;
use super::services::{
    AnswerEvaluator, InterviewLoop, LanguageService, MoodClassifier, ProfileCollector,
    QuestionGenerator, ReportSynthesizer, Translator,
};

/// Upper bound on consecutive auto-advance steps within one turn.
const MAX_AUTO_STEPS: usize = 8;

/// Per-conversation preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreeningSettings {
    /// Seeds the session language until detection overrides it.
    pub display_language: SupportedLanguage,
    /// Scoring calls allowed per answer.
    pub evaluation_attempts: u32,
}

impl Default for ScreeningSettings {
    fn default() -> Self {
        Self {
            display_language: SupportedLanguage::English,
            evaluation_attempts: 2,
        }
    }
}

/// Result of one processed turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Stage after the turn and every auto-advance step.
    pub stage: Stage,
    /// Transcript entries appended by this turn, user turn included.
    pub new_turns: Vec<ConversationTurn>,
    /// True when the turn reset the conversation.
    pub restarted: bool,
}

/// Owns one screening conversation and routes each candidate turn to the
/// service for the current stage.
pub struct ScreeningOrchestrator {
    settings: ScreeningSettings,
    session: ScreeningSession,
    mood: MoodClassifier,
    translator: Translator,
    collector: ProfileCollector,
    generator: QuestionGenerator,
    interview: InterviewLoop,
    reporter: ReportSynthesizer,
}

impl ScreeningOrchestrator {
    /// Wires every stage service to `provider` and opens an empty session.
    pub fn new(provider: Arc<dyn AIProvider>, settings: ScreeningSettings) -> Self {
        let language = LanguageService::new(provider);
        let translator = Translator::new(language.clone());
        Self {
            session: ScreeningSession::new(settings.display_language),
            mood: MoodClassifier::new(language.clone()),
            collector: ProfileCollector::new(translator.clone()),
            generator: QuestionGenerator::new(language.clone(), translator.clone()),
            interview: InterviewLoop::new(
                AnswerEvaluator::new(language.clone(), settings.evaluation_attempts),
                language.clone(),
                translator.clone(),
            ),
            reporter: ReportSynthesizer::new(language, translator.clone()),
            translator,
            settings,
        }
    }

    /// Emits the welcome message. Does nothing once the transcript has entries.
    pub async fn start(&mut self) -> Vec<ConversationTurn> {
        if !self.session.transcript().is_empty() {
            return Vec::new();
        }
        let welcome = self
            .translator
            .translate(self.session.id(), messages::WELCOME, self.session.language())
            .await;
        self.session.transcript_mut().push_assistant(welcome);
        self.session.transcript().turns().to_vec()
    }

    /// Processes one candidate message to completion.
    pub async fn submit_turn(&mut self, text: &str) -> Result<TurnOutcome, ScreeningError> {
        if self.session.is_ended() {
            return Err(ScreeningError::ConversationEnded);
        }
        // Commands are matched trimmed; the reply itself is stored as typed.
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ScreeningError::EmptyInput);
        }

        if self.session.stage() == Stage::Failed
            && trimmed.eq_ignore_ascii_case(messages::RESTART_COMMAND)
        {
            let new_turns = self.reset().await;
            return Ok(TurnOutcome {
                stage: self.session.stage(),
                new_turns,
                restarted: true,
            });
        }

        let offset = self.session.transcript().len();
        self.session.transcript_mut().push_user(text);

        if is_exit_request(text) {
            tracing::info!(session_id = %self.session.id(), from = %self.session.stage(), "candidate ended the conversation");
            self.session.transcript_mut().push_assistant(FAREWELL_MESSAGE);
            self.session.transition_to(Stage::Ended)?;
            return Ok(self.outcome(offset));
        }

        let mood = self
            .mood
            .classify(self.session.id(), text, self.session.mood())
            .await;
        self.session.set_mood(mood);

        match self.session.stage() {
            stage if stage.profile_field().is_some() => {
                self.collector.collect(&mut self.session, text).await?;
            }
            Stage::Interviewing => {
                self.interview.handle_answer(&mut self.session, text).await?;
            }
            Stage::Failed => {
                let reminder = self
                    .translator
                    .translate(self.session.id(), messages::FAILED_REMINDER, self.session.language())
                    .await;
                self.session.transcript_mut().push_assistant(reminder);
            }
            // Auto-advance stages never wait for input; the driver runs them below.
            _ => {}
        }

        self.drive().await?;
        Ok(self.outcome(offset))
    }

    /// Runs auto-advance stages until one makes no progress or waits for input.
    async fn drive(&mut self) -> Result<(), ScreeningError> {
        for _ in 0..MAX_AUTO_STEPS {
            let progressed = match self.session.stage() {
                Stage::GeneratingQuestions => {
                    self.generator.run(&mut self.session).await?;
                    true
                }
                Stage::Interviewing => self.interview.present(&mut self.session)?,
                Stage::Reporting => {
                    self.reporter.run(&mut self.session).await?;
                    true
                }
                _ => false,
            };
            if !progressed {
                return Ok(());
            }
        }
        tracing::warn!(session_id = %self.session.id(), stage = %self.session.stage(), "auto-advance step limit reached");
        Ok(())
    }

    /// Discards the conversation and starts a fresh one.
    pub async fn reset(&mut self) -> Vec<ConversationTurn> {
        tracing::info!(session_id = %self.session.id(), "conversation reset");
        self.session = ScreeningSession::new(self.settings.display_language);
        self.start().await
    }

    /// Full transcript of the live conversation.
    pub fn transcript(&self) -> &Transcript {
        self.session.transcript()
    }

    /// Serializable view of the live session.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// The live session.
    pub fn session(&self) -> &ScreeningSession {
        &self.session
    }

    /// Settings applied to every new session.
    pub fn settings(&self) -> ScreeningSettings {
        self.settings
    }

    /// Sets the display-language preference and applies it to the live
    /// session. Later detection may override it again.
    pub fn set_display_language(&mut self, language: SupportedLanguage) {
        self.settings.display_language = language;
        if !self.session.is_ended() {
            self.session.set_language(language.as_str());
        }
    }

    fn outcome(&self, offset: usize) -> TurnOutcome {
        TurnOutcome {
            stage: self.session.stage(),
            new_turns: self.session.transcript().since(offset).to_vec(),
            restarted: false,
        }
    }
}
