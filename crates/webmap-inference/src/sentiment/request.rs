//! Classification request types.

use serde::{Deserialize, Serialize};

/// Request for a single text classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    /// Identifier of the classification model.
    pub model: String,
    /// Text to classify.
    pub text: String,
}

impl ClassificationRequest {
    /// Creates a new classification request for the given model.
    pub fn new(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            text: text.into(),
        }
    }

    /// Returns the length of the input text in characters.
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }
}
