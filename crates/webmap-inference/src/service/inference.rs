//! Unified inference service with observability.
//!
//! This module provides [`InferenceService`] which wraps an inference
//! provider and adds structured logging with timing for every call.

use std::fmt;
use std::sync::Arc;

use jiff::Timestamp;

use super::InferenceProvider;
use crate::chat::ChatRequest;
use crate::sentiment::{Classification, ClassificationRequest};
use crate::{Result, TRACING_TARGET};

/// Unified inference service with observability.
///
/// Cheap to clone; all clones share the same provider.
#[derive(Clone)]
pub struct InferenceService {
    provider: Arc<dyn InferenceProvider>,
}

impl fmt::Debug for InferenceService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceService").finish_non_exhaustive()
    }
}

impl InferenceService {
    /// Create a new inference service from a provider.
    pub fn new<P>(provider: P) -> Self
    where
        P: InferenceProvider + 'static,
    {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Classify text and return the top-ranked label.
    pub async fn classify_sentiment(
        &self,
        request: &ClassificationRequest,
    ) -> Result<Classification> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            model = %request.model,
            text_length = request.text_length(),
            "Processing classification request"
        );

        let result = self.provider.classify_sentiment(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(classification) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    model = %request.model,
                    label = %classification.label,
                    score = classification.score,
                    elapsed_ms = elapsed.as_millis(),
                    "Classification successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    model = %request.model,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Classification failed"
                );
            }
        }

        result
    }

    /// Run a chat completion and return the first completion's text.
    pub async fn complete_chat(&self, request: &ChatRequest) -> Result<String> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            model = %request.model,
            message_count = request.messages.len(),
            prompt_length = request.prompt_length(),
            max_tokens = request.max_tokens,
            temperature = request.temperature,
            "Processing chat completion request"
        );

        let result = self.provider.complete_chat(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(content) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    model = %request.model,
                    content_length = content.chars().count(),
                    elapsed_ms = elapsed.as_millis(),
                    "Chat completion successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    model = %request.model,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Chat completion failed"
                );
            }
        }

        result
    }
}
