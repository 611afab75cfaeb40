//! Travel chat response types.

use schemars::JsonSchema;
use serde::Serialize;

/// Number of characters of the provider error quoted in a degraded reply.
const ERROR_EXCERPT_CHARS: usize = 100;

/// Reply of the travel assistant.
///
/// Provider failures never surface as an error status. They produce a
/// [`TravelChatReply::Degraded`] reply carrying an apology and the error text.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum TravelChatReply {
    /// The model answered.
    Answered {
        /// Trimmed model output, or a fallback when it was empty.
        response: String,
        /// Location echoed from the request, `null` when absent.
        context: Option<String>,
    },
    /// The provider call failed.
    Degraded {
        /// Apology quoting the start of the error.
        response: String,
        /// Full error text.
        error: String,
    },
}

impl TravelChatReply {
    /// Creates a successful reply.
    pub fn answered(response: String, context: Option<String>) -> Self {
        Self::Answered { response, context }
    }

    /// Creates a degraded reply from the provider error text.
    pub fn degraded(error: String) -> Self {
        let excerpt: String = error.chars().take(ERROR_EXCERPT_CHARS).collect();

        Self::Degraded {
            response: format!("Xin lỗi, tôi đang gặp sự cố: {excerpt}"),
            error,
        }
    }

    /// Returns `true` if the provider call failed.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}
