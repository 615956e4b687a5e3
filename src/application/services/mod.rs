//! Application services - one per step of the screening conversation.
//!
//! Every service talks to the language capability through `LanguageService`
//! and degrades to a local default when a call fails, except question
//! generation, which fails the session.

mod interview_loop;
mod language_service;
mod mood_classifier;
mod profile_collector;
mod question_generator;
mod report_synthesizer;
mod translator;

pub use interview_loop::{AnswerEvaluator, InterviewLoop};
pub use language_service::{parse_json_object, LanguageService, MoodMetadata};
pub use mood_classifier::MoodClassifier;
pub use profile_collector::ProfileCollector;
pub use question_generator::QuestionGenerator;
pub use report_synthesizer::ReportSynthesizer;
pub use translator::Translator;
