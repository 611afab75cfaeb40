//! Middleware for `axum::Router` and HTTP request processing.
//!
//! - Security: CORS with explicitly enumerated origins
//! - Observability: request IDs, tracing spans, sensitive header redaction
//! - Recovery: panics and request timeouts rendered as `{"detail"}` errors
//! - Specification: OpenAPI document with a Scalar UI
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use axum::Router;
//! use webmap_server::handler::routes;
//! use webmap_server::middleware::{
//!     CorsConfig, OpenApiConfig, RecoveryConfig, RouterObservabilityExt, RouterOpenApiExt,
//!     RouterRecoveryExt, RouterSecurityExt,
//! };
//! use webmap_server::service::ServiceState;
//!
//! fn app(state: ServiceState) -> Router {
//!     routes()
//!         .with_open_api(OpenApiConfig::default())
//!         .with_state(state)
//!         .with_security(&CorsConfig::default())
//!         .with_observability()
//!         .with_recovery(&RecoveryConfig::default())
//! }
//! ```

mod observability;
mod recovery;
mod security;
mod specification;

pub use observability::RouterObservabilityExt;
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use security::{CorsConfig, RouterSecurityExt};
pub use specification::{OpenApiConfig, RouterOpenApiExt};
