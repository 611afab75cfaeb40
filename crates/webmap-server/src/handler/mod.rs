//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use aide::openapi::OpenApi;
//! use webmap_inference::{HfClient, HfConfig, InferenceService};
//! use webmap_server::handler::routes;
//! use webmap_server::service::ServiceState;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = HfConfig::builder().with_api_token("hf_xxx").build()?;
//! let inference = InferenceService::new(HfClient::new(config)?);
//! let state = ServiceState::new(inference);
//!
//! let mut api = OpenApi::default();
//! let router: axum::Router = routes().finish_api(&mut api).with_state(state);
//! # let _ = router;
//! # Ok(())
//! # }
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod chat;
mod error;
mod monitors;
mod places;
mod request;
mod response;
mod sentiment;
mod utils;

use aide::axum::ApiRouter;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
pub use crate::handler::request::{AnalyzeSentiment, PlaceQuery, TravelChat};
pub use crate::handler::response::{
    HealthStatus, PlaceRecommendations, PlaceSummary, SentimentAnalysis, ServiceInfo,
    TravelChatReply,
};
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`ApiRouter`] with all routes and the `404` fallback.
pub fn routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(monitors::routes())
        .merge(sentiment::routes())
        .merge(chat::routes())
        .merge(places::routes())
        .fallback(handler)
}
