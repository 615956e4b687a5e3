//! TalentScout - automated recruiting-screening assistant.
//!
//! Walks a candidate through profile intake, a short technical quiz tailored
//! to their stack and seniority, and a closing summary. Text generation is
//! delegated to an OpenAI-compatible completion endpoint behind the
//! [`ports::AIProvider`] trait.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
