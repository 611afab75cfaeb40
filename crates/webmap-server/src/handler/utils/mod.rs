//! Handler utilities shared across routes.

mod prompts;

pub use prompts::{
    CHAT_MODEL, CHAT_TEMPERATURE, RECOMMEND_MAX_TOKENS, RECOMMEND_TEMPERATURE, SENTIMENT_MODEL,
    SUMMARY_MAX_TOKENS, SUMMARY_TEMPERATURE, completion_or,
};
