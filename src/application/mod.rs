//! Application layer - services and the screening orchestrator.
//!
//! The orchestrator owns the session and routes each turn; services wrap the
//! language capability for one conversation step each.

pub mod messages;
pub mod orchestrator;
pub mod prompts;
pub mod services;

pub use orchestrator::{ScreeningOrchestrator, ScreeningSettings, TurnOutcome};
