//! Ports - interfaces to external capabilities.
//!
//! The only external collaborator of the screening core is the
//! text-generation provider.

mod ai_provider;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, ResponseFormat, TokenUsage,
};
