//! Wire formats of the HuggingFace inference router.

use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;
use crate::sentiment::Classification;

/// Body of a text classification call.
#[derive(Debug, Serialize)]
pub(crate) struct ClassificationPayload<'a> {
    pub inputs: &'a str,
}

/// Classification output.
///
/// Single-input calls come back either flat or wrapped in an outer list
/// depending on the serving backend.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ClassificationOutput {
    Nested(Vec<Vec<Classification>>),
    Flat(Vec<Classification>),
}

impl ClassificationOutput {
    /// Returns every candidate label regardless of nesting.
    pub fn into_candidates(self) -> Vec<Classification> {
        match self {
            Self::Nested(outer) => outer.into_iter().flatten().collect(),
            Self::Flat(candidates) => candidates,
        }
    }
}

/// Body of an OpenAI-compatible chat completion call.
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionPayload<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub max_tokens: u32,
    pub temperature: f32,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionOutput {
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionChoice {
    pub message: ChatCompletionMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
}
