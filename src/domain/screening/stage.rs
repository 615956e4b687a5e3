//! Screening stage state machine.
//!
//! Exactly one stage is active per conversation. Intake stages advance one
//! position per accepted user turn; `GeneratingQuestions` and `Reporting`
//! run without waiting for input; `Ended` absorbs everything.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

use super::profile::ProfileField;

/// The stage a screening conversation is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Waiting for the candidate's full name.
    #[default]
    Greeting,
    CollectEmail,
    CollectPhone,
    /// Waiting for years of experience; re-prompts until digits arrive.
    CollectExperience,
    CollectRole,
    CollectLocation,
    CollectTechStack,
    /// Asking the language service for the question set.
    GeneratingQuestions,
    /// Presenting questions and scoring answers.
    Interviewing,
    /// Producing the closing summary.
    Reporting,
    /// Conversation is over.
    Ended,
    /// Question generation failed; only `restart` or an exit request help.
    Failed,
}

/// Stages in their fixed linear order.
const LINEAR_ORDER: [Stage; 11] = [
    Stage::Greeting,
    Stage::CollectEmail,
    Stage::CollectPhone,
    Stage::CollectExperience,
    Stage::CollectRole,
    Stage::CollectLocation,
    Stage::CollectTechStack,
    Stage::GeneratingQuestions,
    Stage::Interviewing,
    Stage::Reporting,
    Stage::Ended,
];

/// Stages counted by the progress indicator.
const PROGRESS_STEPS: [Stage; 9] = [
    Stage::Greeting,
    Stage::CollectEmail,
    Stage::CollectPhone,
    Stage::CollectExperience,
    Stage::CollectRole,
    Stage::CollectLocation,
    Stage::CollectTechStack,
    Stage::Interviewing,
    Stage::Reporting,
];

impl Stage {
    /// Returns the next stage in the linear order, if any.
    ///
    /// `Failed` sits outside the linear order and has no successor.
    pub fn next(&self) -> Option<Stage> {
        let index = LINEAR_ORDER.iter().position(|s| s == self)?;
        LINEAR_ORDER.get(index + 1).copied()
    }

    /// Returns the profile field an intake stage fills.
    pub fn profile_field(&self) -> Option<ProfileField> {
        match self {
            Self::Greeting => Some(ProfileField::Name),
            Self::CollectEmail => Some(ProfileField::Email),
            Self::CollectPhone => Some(ProfileField::Phone),
            Self::CollectExperience => Some(ProfileField::Experience),
            Self::CollectRole => Some(ProfileField::Role),
            Self::CollectLocation => Some(ProfileField::Location),
            Self::CollectTechStack => Some(ProfileField::TechStack),
            _ => None,
        }
    }

    /// Percentage of the visible steps reached, 0-100.
    ///
    /// Question generation reports the tech-stack step; terminal stages report 100.
    pub fn progress_percent(&self) -> u8 {
        let step = match self {
            Self::GeneratingQuestions => Self::CollectTechStack,
            Self::Ended | Self::Failed => return 100,
            other => *other,
        };
        let index = PROGRESS_STEPS
            .iter()
            .position(|s| *s == step)
            .unwrap_or(PROGRESS_STEPS.len() - 1);
        (((index + 1) * 100) / PROGRESS_STEPS.len()) as u8
    }
}

impl StateMachine for Stage {
    fn valid_transitions(&self) -> Vec<Self> {
        use Stage::*;
        match self {
            Greeting => vec![CollectEmail, Ended],
            CollectEmail => vec![CollectPhone, Ended],
            CollectPhone => vec![CollectExperience, Ended],
            CollectExperience => vec![CollectExperience, CollectRole, Ended],
            CollectRole => vec![CollectLocation, Ended],
            CollectLocation => vec![CollectTechStack, Ended],
            CollectTechStack => vec![GeneratingQuestions, Ended],
            GeneratingQuestions => vec![Interviewing, Failed, Ended],
            Interviewing => vec![Interviewing, Reporting, Ended],
            Reporting => vec![Ended],
            Failed => vec![Ended],
            Ended => vec![],
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::CollectEmail => "collect_email",
            Self::CollectPhone => "collect_phone",
            Self::CollectExperience => "collect_experience",
            Self::CollectRole => "collect_role",
            Self::CollectLocation => "collect_location",
            Self::CollectTechStack => "collect_tech_stack",
            Self::GeneratingQuestions => "generating_questions",
            Self::Interviewing => "interviewing",
            Self::Reporting => "reporting",
            Self::Ended => "ended",
            Self::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}
