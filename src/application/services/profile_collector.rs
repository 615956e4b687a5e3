//! Sequential slot-filling of the candidate profile.

use crate::application::messages;
use crate::domain::foundation::ValidationError;
use crate::domain::screening::{ProfileField, ScreeningSession, Stage};

use super::translator::Translator;

/// Fills one profile field per user turn, in the fixed collection order.
#[derive(Clone)]
pub struct ProfileCollector {
    translator: Translator,
}

impl ProfileCollector {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Applies `text` to the field bound to the current stage.
    ///
    /// On success the next stage's prompt is appended and the stage advances
    /// by one. A malformed experience value appends a retry prompt and leaves
    /// the stage unchanged.
    pub async fn collect(
        &self,
        session: &mut ScreeningSession,
        text: &str,
    ) -> Result<(), ValidationError> {
        let field = session.stage().profile_field().ok_or_else(|| {
            ValidationError::invalid_format(
                "stage",
                format!("{} does not collect a profile field", session.stage()),
            )
        })?;

        match session.profile_mut().fill(field, text) {
            Ok(()) => {}
            Err(ValidationError::InvalidFormat { reason, .. }) if field == ProfileField::Experience => {
                tracing::debug!(session_id = %session.id(), %reason, "experience not understood, asking again");
                let retry = self
                    .translator
                    .translate(session.id(), messages::EXPERIENCE_RETRY, session.language())
                    .await;
                session.transcript_mut().push_assistant(retry);
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        session.advance()?;
        let prompt = next_prompt(session);
        let localized = self
            .translator
            .translate(session.id(), &prompt, session.language())
            .await;
        session.transcript_mut().push_assistant(localized);
        Ok(())
    }
}

/// English prompt for the stage the session just entered.
fn next_prompt(session: &ScreeningSession) -> String {
    match session.stage() {
        Stage::CollectEmail => messages::ask_email(session.profile().display_name()),
        Stage::CollectPhone => messages::ASK_PHONE.to_string(),
        Stage::CollectExperience => messages::ASK_EXPERIENCE.to_string(),
        Stage::CollectRole => messages::ASK_ROLE.to_string(),
        Stage::CollectLocation => messages::ASK_LOCATION.to_string(),
        Stage::CollectTechStack => messages::ASK_TECH_STACK.to_string(),
        _ => messages::GENERATING_QUESTIONS.to_string(),
    }
}
