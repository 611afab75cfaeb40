//! HuggingFace inference router client.
//!
//! - [`HfConfig`] and [`HfBuilder`]: validated client configuration
//! - [`HfClient`]: bearer-authenticated client implementing
//!   [`SentimentProvider`](crate::SentimentProvider) and
//!   [`ChatProvider`](crate::ChatProvider)

mod config;
mod hf_client;
mod wire;

pub use config::{DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, HfBuilder, HfConfig};
pub use hf_client::HfClient;
