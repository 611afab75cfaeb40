//! Text classification types and operations.
//!
//! This module provides the request and response types used to classify
//! free text into sentiment labels with a confidence score.

mod request;
mod response;

pub use request::ClassificationRequest;
pub use response::Classification;

use crate::Result;

/// Provider trait for text classification.
///
/// Implement this trait to plug a classification backend into the
/// [`InferenceService`](crate::InferenceService).
#[async_trait::async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Classifies the request text and returns the top-ranked label.
    async fn classify_sentiment(&self, request: &ClassificationRequest) -> Result<Classification>;
}
