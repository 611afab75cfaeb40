//! Place recommendation and summary request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;
use webmap_inference::{ChatMessage, ChatRequest};

use super::validations::validate_not_blank;
use crate::handler::utils::{
    CHAT_MODEL, RECOMMEND_MAX_TOKENS, RECOMMEND_TEMPERATURE, SUMMARY_MAX_TOKENS,
    SUMMARY_TEMPERATURE,
};

const RECOMMEND_SYSTEM_PROMPT: &str = "Bạn là chuyên gia du lịch Việt Nam.";
const SUMMARY_SYSTEM_PROMPT: &str = "Bạn là hướng dẫn viên du lịch.";

/// Request payload shared by the recommendation and summary operations.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct PlaceQuery {
    /// Place name, echoed back in the reply.
    #[validate(custom(function = "validate_not_blank"))]
    pub location: String,
    /// Free-text traveller preferences. Ignored by the summary operation.
    #[serde(default)]
    pub preferences: Option<String>,
}

impl PlaceQuery {
    /// Returns the recommendation prompt.
    pub fn recommend_prompt(&self) -> String {
        let mut prompt = format!("Gợi ý 3 địa điểm du lịch gần {}", self.location);

        if let Some(preferences) = self.preferences.as_deref()
            && !preferences.is_empty()
        {
            prompt.push_str(" phù hợp với sở thích: ");
            prompt.push_str(preferences);
        }

        prompt.push_str(". Trả lời ngắn gọn bằng tiếng Việt.");
        prompt
    }

    /// Returns the summary prompt.
    pub fn summary_prompt(&self) -> String {
        format!(
            "Mô tả ngắn gọn về {} trong 2-3 câu bằng tiếng Việt. Nêu điểm nổi bật nhất.",
            self.location
        )
    }

    /// Builds the recommendation conversation.
    pub fn to_recommend_request(&self) -> ChatRequest {
        ChatRequest::new(CHAT_MODEL)
            .with_message(ChatMessage::system(RECOMMEND_SYSTEM_PROMPT))
            .with_message(ChatMessage::user(self.recommend_prompt()))
            .with_max_tokens(RECOMMEND_MAX_TOKENS)
            .with_temperature(RECOMMEND_TEMPERATURE)
    }

    /// Builds the summary conversation.
    pub fn to_summary_request(&self) -> ChatRequest {
        ChatRequest::new(CHAT_MODEL)
            .with_message(ChatMessage::system(SUMMARY_SYSTEM_PROMPT))
            .with_message(ChatMessage::user(self.summary_prompt()))
            .with_max_tokens(SUMMARY_MAX_TOKENS)
            .with_temperature(SUMMARY_TEMPERATURE)
    }
}
