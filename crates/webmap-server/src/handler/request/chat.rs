//! Travel chat request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use webmap_inference::{ChatMessage, ChatRequest, DEFAULT_MAX_TOKENS};

use crate::handler::utils::{CHAT_MODEL, CHAT_TEMPERATURE};

/// Persona of the travel assistant.
const SYSTEM_PROMPT: &str =
    "Bạn là trợ lý du lịch thông minh. Trả lời ngắn gọn, hữu ích bằng tiếng Việt.";

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

/// Request payload for the travel assistant.
///
/// The message is forwarded as-is, even when empty.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TravelChat {
    /// Question for the assistant.
    pub message: String,
    /// Where the user currently is, echoed back in the reply.
    #[serde(default)]
    pub context: Option<String>,
    /// Maximum number of tokens to generate.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl TravelChat {
    /// Returns the user turn, prefixed with the location when one is known.
    pub fn user_prompt(&self) -> String {
        match self.context.as_deref() {
            Some(context) if !context.is_empty() => {
                format!("Tôi đang ở {}. {}", context, self.message)
            }
            _ => self.message.clone(),
        }
    }

    /// Builds the two-message conversation sent to the chat model.
    pub fn to_chat_request(&self) -> ChatRequest {
        ChatRequest::new(CHAT_MODEL)
            .with_message(ChatMessage::system(SYSTEM_PROMPT))
            .with_message(ChatMessage::user(self.user_prompt()))
            .with_max_tokens(self.max_tokens)
            .with_temperature(CHAT_TEMPERATURE)
    }
}

#[cfg(test)]
mod tests {
    use webmap_inference::ChatRole;

    use super::*;

    fn chat(message: &str, context: Option<&str>) -> TravelChat {
        TravelChat {
            message: message.to_owned(),
            context: context.map(str::to_owned),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    #[test]
    fn max_tokens_defaults_when_absent() {
        let request: TravelChat = serde_json::from_str(r#"{"message":"Xin chào"}"#).unwrap();

        assert_eq!(request.max_tokens, 200);
        assert_eq!(request.context, None);
    }

    #[test]
    fn context_is_prepended() {
        let request = chat("Where to eat?", Some("Hanoi"));
        assert_eq!(request.user_prompt(), "Tôi đang ở Hanoi. Where to eat?");
    }

    #[test]
    fn missing_or_empty_context_keeps_message() {
        assert_eq!(chat("Where to eat?", None).user_prompt(), "Where to eat?");
        assert_eq!(chat("Where to eat?", Some("")).user_prompt(), "Where to eat?");
    }

    #[test]
    fn conversation_shape() {
        let request = TravelChat {
            max_tokens: 64,
            ..chat("", None)
        }
        .to_chat_request();

        assert_eq!(request.model, CHAT_MODEL);
        assert_eq!(request.max_tokens, 64);
        assert_eq!(request.temperature, CHAT_TEMPERATURE);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, ChatRole::User);
        assert_eq!(request.messages[1].content, "");
    }
}
