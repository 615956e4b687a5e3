//! Language service - the single gateway to the text-generation provider.
//!
//! Offers free-form completion, JSON completion against a typed shape
//! contract, and tone/language metadata extraction. Every failure comes back
//! as an `AIError`; nothing here retries.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::prompts;
use crate::domain::foundation::SessionId;
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata};

/// Raw tone/language metadata as returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoodMetadata {
    pub sentiment: String,
    pub language: String,
}

/// Thin wrapper over an `AIProvider` used by every screening component.
#[derive(Clone)]
pub struct LanguageService {
    provider: Arc<dyn AIProvider>,
}

impl LanguageService {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    /// Free-form completion. Returns the trimmed text.
    pub async fn complete(
        &self,
        session_id: SessionId,
        trace: &str,
        prompt: &str,
    ) -> Result<String, AIError> {
        let request = CompletionRequest::new(RequestMetadata::new(session_id, trace))
            .with_message(MessageRole::User, prompt);
        let response = self.provider.complete(request).await?;
        Ok(response.content.trim().to_string())
    }

    /// JSON-mode completion deserialized into `T`.
    ///
    /// Any deviation from `T`'s shape is an `AIError::SchemaMismatch`.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        session_id: SessionId,
        trace: &str,
        prompt: &str,
    ) -> Result<T, AIError> {
        let request = CompletionRequest::new(RequestMetadata::new(session_id, trace))
            .with_message(MessageRole::User, prompt)
            .json_mode();
        let response = self.provider.complete(request).await?;
        parse_json_object(&response.content)
    }

    /// Infers sentiment and language of a candidate message.
    pub async fn extract_metadata(
        &self,
        session_id: SessionId,
        text: &str,
    ) -> Result<MoodMetadata, AIError> {
        self.complete_json(session_id, "mood", &prompts::mood(text)).await
    }
}

/// Parses the first JSON object in `content` into `T`.
///
/// Tolerates surrounding prose or code fences; the object itself must match.
pub fn parse_json_object<T: DeserializeOwned>(content: &str) -> Result<T, AIError> {
    let start = content.find('{');
    let end = content.rfind('}');
    let body = match (start, end) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => return Err(AIError::schema_mismatch("response contains no JSON object")),
    };
    serde_json::from_str(body).map_err(|e| AIError::schema_mismatch(e.to_string()))
}
