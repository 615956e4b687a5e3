//! OpenAI-compatible provider - AIProvider over a chat-completions endpoint.
//!
//! Defaults to Groq's OpenAI-compatible API; any endpoint speaking the same
//! `/chat/completions` protocol works by changing the base URL.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("llama-3.3-70b-versatile")
//!     .with_base_url("https://api.groq.com/openai/v1");
//!
//! let provider = OpenAIProvider::new(config)?;
//! ```
//!
//! JSON mode sends `response_format: {"type": "json_object"}`. The provider
//! makes exactly one attempt per call; retry policy belongs to callers.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    ResponseFormat, TokenUsage,
};

/// Default endpoint (Groq, OpenAI-compatible).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Default model.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Configuration for the OpenAI-compatible provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Chat-completions provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new provider with the given configuration.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if the HTTP client cannot be built.
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to the wire format.
    fn to_wire_request(&self, request: &CompletionRequest) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|msg| ChatMessage {
                    role: msg.role.as_str().to_string(),
                    content: msg.content.clone(),
                })
                .collect(),
            response_format: match request.response_format {
                ResponseFormat::JsonObject => Some(WireResponseFormat {
                    kind: "json_object".to_string(),
                }),
                ResponseFormat::Text => None,
            },
        }
    }

    /// Sends a request.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let wire_request = self.to_wire_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Parses a response, mapping error statuses to `AIError`.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &error_body));
        }

        let wire: ChatResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        into_completion(wire)
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            session_id = %request.metadata.session_id,
            json_mode = request.is_json_mode(),
            "sending completion request"
        );
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        let name = if self.config.base_url.contains("groq.com") {
            "groq"
        } else {
            "openai-compatible"
        };
        ProviderInfo::new(name, &self.config.model)
    }
}

/// Maps a non-success HTTP status and body to an `AIError`.
fn error_for_status(status: StatusCode, error_body: &str) -> AIError {
    match status.as_u16() {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(parse_retry_after(error_body)),
        400 => {
            if error_body.contains("content_filter") {
                AIError::content_filtered(error_body.to_string())
            } else {
                AIError::InvalidRequest(error_body.to_string())
            }
        }
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

/// Extracts "try again in Ns" from an error body; defaults to 30 seconds.
fn parse_retry_after(error_body: &str) -> u32 {
    let message = serde_json::from_str::<serde_json::Value>(error_body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(|m| m.as_str()).map(String::from));

    message
        .as_deref()
        .and_then(|msg| msg.find("try again in ").map(|idx| &msg[idx + 13..]))
        .and_then(|rest| {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse::<u32>().ok()
        })
        .unwrap_or(30)
}

/// Converts the wire response into a `CompletionResponse`.
fn into_completion(wire: ChatResponse) -> Result<CompletionResponse, AIError> {
    let choice = wire
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AIError::parse("No choices in response"))?;

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    };

    let usage = wire
        .usage
        .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content: choice.message.content.unwrap_or_default(),
        usage,
        model: wire.model,
        finish_reason,
    })
}

// ----- Chat Completions Wire Types -----

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<WireResponseFormat>,
}

#[derive(Debug, Serialize)]
struct WireResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    model: String,
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::ports::{MessageRole, RequestMetadata};

    fn provider() -> OpenAIProvider {
        OpenAIProvider::new(OpenAIConfig::new("test-key")).unwrap()
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(SessionId::new(), "test"))
            .with_message(MessageRole::User, "Hello")
    }

    #[test]
    fn config_builder_works() {
        let config = OpenAIConfig::new("test-key")
            .with_model("mixtral")
            .with_base_url("https://custom.api.com/v1")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "mixtral");
        assert_eq!(config.base_url, "https://custom.api.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_defaults_to_groq() {
        let config = OpenAIConfig::new("k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn completions_url_tolerates_trailing_slash() {
        let provider =
            OpenAIProvider::new(OpenAIConfig::new("k").with_base_url("https://x.test/v1/")).unwrap();
        assert_eq!(provider.completions_url(), "https://x.test/v1/chat/completions");
    }

    #[test]
    fn text_request_omits_response_format() {
        let wire = provider().to_wire_request(&request());
        let json = serde_json::to_value(&wire).unwrap();
        assert!(json.get("response_format").is_none());
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["model"], DEFAULT_MODEL);
    }

    #[test]
    fn json_request_sets_json_object_format() {
        let wire = provider().to_wire_request(&request().json_mode());
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
    }

    #[test]
    fn provider_info_names_groq() {
        let info = provider().provider_info();
        assert_eq!(info.name, "groq");
        assert_eq!(info.model, DEFAULT_MODEL);
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(
            error_for_status(StatusCode::UNAUTHORIZED, ""),
            AIError::AuthenticationFailed
        ));
        assert!(matches!(
            error_for_status(StatusCode::TOO_MANY_REQUESTS, ""),
            AIError::RateLimited { retry_after_secs: 30 }
        ));
        assert!(matches!(
            error_for_status(StatusCode::BAD_GATEWAY, "oops"),
            AIError::Unavailable { .. }
        ));
        assert!(matches!(
            error_for_status(StatusCode::BAD_REQUEST, "bad"),
            AIError::InvalidRequest(_)
        ));
    }

    #[test]
    fn parse_retry_after_from_message() {
        let error = r#"{"error":{"message":"Rate limit reached. Please try again in 12s."}}"#;
        assert_eq!(parse_retry_after(error), 12);
    }

    #[test]
    fn parse_retry_after_default() {
        assert_eq!(parse_retry_after(r#"{"error":{"message":"nope"}}"#), 30);
        assert_eq!(parse_retry_after("not json"), 30);
    }

    #[test]
    fn into_completion_takes_first_choice() {
        let wire: ChatResponse = serde_json::from_str(
            r#"{"model":"m","choices":[{"message":{"role":"assistant","content":"Hi"},"finish_reason":"length"}],"usage":{"prompt_tokens":3,"completion_tokens":2}}"#,
        )
        .unwrap();
        let completion = into_completion(wire).unwrap();
        assert_eq!(completion.content, "Hi");
        assert_eq!(completion.finish_reason, FinishReason::Length);
        assert_eq!(completion.usage.total_tokens, 5);
    }

    #[test]
    fn into_completion_without_choices_is_parse_error() {
        let wire: ChatResponse = serde_json::from_str(r#"{"model":"m","choices":[]}"#).unwrap();
        assert!(matches!(into_completion(wire), Err(AIError::Parse(_))));
    }
}
