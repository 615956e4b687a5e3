//! Screening domain - the candidate intake and interview conversation.
//!
//! Pure state and rules: stages and their transitions, the candidate
//! profile, the question set and answer scores, mood, and the transcript.
//! No knowledge of the language service.

mod errors;
mod exit;
mod interview;
mod mood;
mod profile;
mod session;
mod stage;
mod transcript;

pub use errors::ScreeningError;
pub use exit::{is_exit_request, EXIT_KEYWORDS, EXIT_PHRASE, FAREWELL_MESSAGE};
pub use interview::{
    round_score, AnswerRecord, Interview, QuestionSet, ScoreTriple, MAX_SCORE, MIN_SCORE,
};
pub use mood::{is_english, ConversationMood, Sentiment, SupportedLanguage};
pub use profile::{parse_experience, parse_tech_stack, CandidateProfile, Difficulty, ProfileField};
pub use session::{ScreeningSession, SessionSnapshot};
pub use stage::Stage;
pub use transcript::{ConversationTurn, Transcript, TurnRole};
