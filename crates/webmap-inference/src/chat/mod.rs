//! Chat completion types and operations.
//!
//! This module provides the conversation types sent to chat-completion
//! models and the provider trait that executes them.

mod message;
mod request;

pub use message::{ChatMessage, ChatRole};
pub use request::{ChatRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

use crate::Result;

/// Provider trait for chat completion.
///
/// Implement this trait to plug a chat-completion backend into the
/// [`InferenceService`](crate::InferenceService).
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    /// Runs the conversation and returns the text of the first completion.
    ///
    /// A completion without content is returned as an empty string.
    async fn complete_chat(&self, request: &ChatRequest) -> Result<String>;
}
