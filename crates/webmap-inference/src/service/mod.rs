//! Service layer for inference operations.
//!
//! - [`InferenceProvider`]: the combined capability set a backend must offer
//! - [`InferenceService`]: cloneable wrapper with observability

mod inference;

pub use inference::InferenceService;

use crate::chat::ChatProvider;
use crate::sentiment::SentimentProvider;

/// Unified trait for the inference capabilities consumed by the gateway.
///
/// Combines [`SentimentProvider`] and [`ChatProvider`]. Any type that
/// implements both gets this trait through the blanket implementation.
pub trait InferenceProvider: SentimentProvider + ChatProvider {}

impl<T> InferenceProvider for T where T: SentimentProvider + ChatProvider {}
