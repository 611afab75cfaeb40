//! Model identifiers and sampling settings per operation.

/// Multilingual sentiment classifier.
pub const SENTIMENT_MODEL: &str = "lxyuan/distilbert-base-multilingual-cased-sentiments-student";

/// Instruct model used by every chat-completion operation.
pub const CHAT_MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct";

/// Sampling temperature of the travel assistant.
pub const CHAT_TEMPERATURE: f32 = 0.7;

pub const RECOMMEND_MAX_TOKENS: u32 = 150;
pub const RECOMMEND_TEMPERATURE: f32 = 0.8;

pub const SUMMARY_MAX_TOKENS: u32 = 100;
pub const SUMMARY_TEMPERATURE: f32 = 0.5;

/// Trims a completion and substitutes `placeholder` when nothing is left.
pub fn completion_or(completion: &str, placeholder: &str) -> String {
    match completion.trim() {
        "" => placeholder.to_owned(),
        trimmed => trimmed.to_owned(),
    }
}
