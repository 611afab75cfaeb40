#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod chat;
mod client;
mod error;
#[cfg(feature = "test-utils")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub mod mock;
mod sentiment;
mod service;

pub use chat::{
    ChatMessage, ChatProvider, ChatRequest, ChatRole, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
pub use client::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, HfBuilder, HfClient, HfConfig,
};
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use sentiment::{Classification, ClassificationRequest, SentimentProvider};
pub use service::{InferenceProvider, InferenceService};

/// Tracing target for inference operations.
pub const TRACING_TARGET: &str = "webmap_inference";

/// Tracing target for the HTTP client.
pub const TRACING_TARGET_CLIENT: &str = "webmap_inference::client";
