//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to drive a full screening conversation without calling
//! a real model.
//!
//! # Features
//!
//! - Queued responses, consumed in order
//! - Persistent rules that answer any prompt containing a marker
//! - Error injection for degradation testing
//! - Call tracking for verification
//!
//! Rules are checked first, then the queue, then a default reply.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_rule("Return JSON: {\"questions\"", r#"{"questions":["What is Go?"]}"#)
//!     .with_response("Thanks!");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Reply used when no rule matches and the queue is empty.
pub const DEFAULT_MOCK_REPLY: &str = "Mock response";

/// Mock AI provider for testing.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Prompt-matching rules (never consumed).
    rules: Arc<Mutex<Vec<MockRule>>>,
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion.
    Success { content: String },
    /// Return an error.
    Error(MockError),
}

/// Answers every prompt containing `marker`.
#[derive(Debug, Clone)]
struct MockRule {
    marker: String,
    response: MockResponse,
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Locks a mutex, recovering the data if a panicking test poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            rules: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
        });
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Answers every prompt containing `marker` with `content`.
    pub fn with_rule(self, marker: impl Into<String>, content: impl Into<String>) -> Self {
        self.add_rule(
            marker,
            MockResponse::Success {
                content: content.into(),
            },
        );
        self
    }

    /// Fails every prompt containing `marker` with `error`.
    pub fn with_error_rule(self, marker: impl Into<String>, error: MockError) -> Self {
        self.add_rule(marker, MockResponse::Error(error));
        self
    }

    /// Adds or replaces a rule on a provider that is already shared.
    pub fn set_rule(&self, marker: impl Into<String>, content: impl Into<String>) {
        self.add_rule(
            marker,
            MockResponse::Success {
                content: content.into(),
            },
        );
    }

    /// Removes every rule for `marker`.
    pub fn clear_rule(&self, marker: &str) {
        lock(&self.rules).retain(|rule| rule.marker != marker);
    }

    fn add_rule(&self, marker: impl Into<String>, response: MockResponse) {
        let marker = marker.into();
        let mut rules = lock(&self.rules);
        rules.retain(|rule| rule.marker != marker);
        rules.push(MockRule { marker, response });
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    /// Returns the number of recorded calls whose prompt contains `marker`.
    pub fn calls_matching(&self, marker: &str) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| call.prompt_text().contains(marker))
            .count()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Picks the reply for a prompt: matching rule, then queue, then default.
    fn next_response(&self, prompt: &str) -> MockResponse {
        if let Some(rule) = lock(&self.rules)
            .iter()
            .find(|rule| prompt.contains(&rule.marker))
        {
            return rule.response.clone();
        }

        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: DEFAULT_MOCK_REPLY.to_string(),
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let prompt = request.prompt_text();
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response(&prompt) {
            MockResponse::Success { content } => Ok(CompletionResponse {
                content,
                usage: TokenUsage::new(10, 20),
                model: self.info.model.clone(),
                finish_reason: FinishReason::Stop,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::ports::{MessageRole, RequestMetadata};

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(SessionId::new(), "trace-123"))
            .with_message(MessageRole::User, prompt)
    }

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let provider = MockAIProvider::new().with_response("First").with_response("Second");

        assert_eq!(provider.complete(request("a")).await.unwrap().content, "First");
        assert_eq!(provider.complete(request("b")).await.unwrap().content, "Second");
        assert_eq!(
            provider.complete(request("c")).await.unwrap().content,
            DEFAULT_MOCK_REPLY
        );
    }

    #[tokio::test]
    async fn rules_take_priority_and_persist() {
        let provider = MockAIProvider::new()
            .with_response("queued")
            .with_rule("questions", "{\"questions\":[]}");

        for _ in 0..2 {
            let response = provider.complete(request("give me questions")).await.unwrap();
            assert_eq!(response.content, "{\"questions\":[]}");
        }
        assert_eq!(provider.complete(request("other")).await.unwrap().content, "queued");
    }

    #[tokio::test]
    async fn set_rule_replaces_existing_marker() {
        let provider = MockAIProvider::new().with_rule("x", "old");
        provider.set_rule("x", "new");
        assert_eq!(provider.complete(request("x")).await.unwrap().content, "new");

        provider.clear_rule("x");
        assert_eq!(
            provider.complete(request("x")).await.unwrap().content,
            DEFAULT_MOCK_REPLY
        );
    }

    #[tokio::test]
    async fn returns_configured_errors() {
        let provider = MockAIProvider::new()
            .with_error(MockError::RateLimited { retry_after_secs: 30 })
            .with_error_rule("score", MockError::Timeout { timeout_secs: 5 });

        let err = provider.complete(request("a")).await.unwrap_err();
        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 30 }));

        let err = provider.complete(request("score this")).await.unwrap_err();
        assert!(matches!(err, AIError::Timeout { timeout_secs: 5 }));
    }

    #[tokio::test]
    async fn tracks_calls() {
        let provider = MockAIProvider::new();
        assert_eq!(provider.call_count(), 0);

        provider.complete(request("alpha")).await.unwrap();
        provider.complete(request("beta")).await.unwrap();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.calls_matching("alp"), 1);

        provider.clear_calls();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn respects_delay() {
        let provider = MockAIProvider::new().with_delay(Duration::from_millis(20));
        let start = std::time::Instant::now();
        provider.complete(request("a")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn mock_error_converts_to_ai_error() {
        let err: AIError = MockError::AuthenticationFailed.into();
        assert!(matches!(err, AIError::AuthenticationFailed));

        let err: AIError = MockError::Network { message: "reset".into() }.into();
        assert!(matches!(err, AIError::Network(_)));
    }
}
