//! Scripted mock provider for testing.
//!
//! This module is only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! webmap-inference = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use webmap_inference::mock::MockProvider;
//!
//! let provider = MockProvider::new()
//!     .with_classification("positive", 0.97)
//!     .with_chat_reply("Phở Thìn");
//! let service = provider.clone().into_service();
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use crate::chat::{ChatProvider, ChatRequest};
use crate::sentiment::{Classification, ClassificationRequest, SentimentProvider};
use crate::{Error, ErrorKind, InferenceService, Result};

/// Outcome the mock replays for every call of one capability.
#[derive(Debug, Clone)]
enum Scripted<T> {
    Reply(T),
    Fail(ErrorKind, String),
}

impl<T: Clone> Scripted<T> {
    fn play(&self) -> Result<T> {
        match self {
            Self::Reply(value) => Ok(value.clone()),
            Self::Fail(kind, message) => Err(Error::new(*kind).with_message(message.clone())),
        }
    }
}

#[derive(Debug, Default)]
struct Recorded {
    classifications: Vec<ClassificationRequest>,
    chats: Vec<ChatRequest>,
}

/// Mock provider that replays scripted outcomes and records every request.
///
/// Clones share the recorded requests so a test can keep a handle after
/// moving the provider into a service.
#[derive(Debug, Clone)]
pub struct MockProvider {
    classification: Scripted<Classification>,
    chat: Scripted<String>,
    recorded: Arc<Mutex<Recorded>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            classification: Scripted::Reply(Classification::new("positive", 1.0)),
            chat: Scripted::Reply("mock response".to_owned()),
            recorded: Arc::default(),
        }
    }
}

impl MockProvider {
    /// Creates a mock that answers every call successfully.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays the given label for every classification.
    pub fn with_classification(mut self, label: impl Into<String>, score: f64) -> Self {
        self.classification = Scripted::Reply(Classification::new(label, score));
        self
    }

    /// Fails every classification with the given kind and message.
    pub fn with_classification_error(mut self, kind: ErrorKind, message: impl Into<String>) -> Self {
        self.classification = Scripted::Fail(kind, message.into());
        self
    }

    /// Replays the given text for every chat completion.
    pub fn with_chat_reply(mut self, content: impl Into<String>) -> Self {
        self.chat = Scripted::Reply(content.into());
        self
    }

    /// Fails every chat completion with the given kind and message.
    pub fn with_chat_error(mut self, kind: ErrorKind, message: impl Into<String>) -> Self {
        self.chat = Scripted::Fail(kind, message.into());
        self
    }

    /// Wraps a clone of this mock in an [`InferenceService`].
    pub fn into_service(self) -> InferenceService {
        InferenceService::new(self)
    }

    /// Returns every classification request received so far.
    pub fn classification_requests(&self) -> Vec<ClassificationRequest> {
        self.lock().classifications.clone()
    }

    /// Returns every chat request received so far.
    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.lock().chats.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl SentimentProvider for MockProvider {
    async fn classify_sentiment(&self, request: &ClassificationRequest) -> Result<Classification> {
        self.lock().classifications.push(request.clone());
        self.classification.play()
    }
}

#[async_trait::async_trait]
impl ChatProvider for MockProvider {
    async fn complete_chat(&self, request: &ChatRequest) -> Result<String> {
        self.lock().chats.push(request.clone());
        self.chat.play()
    }
}
