//! OpenAPI specification middleware with Scalar UI integration.
//!
//! Generates the OpenAPI document from the aide [`ApiRouter`] and serves it
//! as JSON together with a Scalar API reference page.
//!
//! [`ApiRouter`]: aide::axum::ApiRouter

use aide::axum::ApiRouter;
use aide::openapi::{Info, OpenApi};
use aide::scalar::Scalar;
use axum::routing::{Router, get};
use axum::{Extension, Json};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// OpenAPI configuration for aide integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct OpenApiConfig {
    /// Path which exposes the OpenAPI JSON specification.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "openapi-json-path",
            env = "OPENAPI_JSON_PATH",
            default_value = "/api/openapi.json"
        )
    )]
    pub open_api_json: String,

    /// Path which exposes the Scalar API reference UI.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "openapi-scalar-path",
            env = "OPENAPI_SCALAR_PATH",
            default_value = "/api/scalar"
        )
    )]
    pub scalar_ui: String,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            open_api_json: "/api/openapi.json".to_owned(),
            scalar_ui: "/api/scalar".to_owned(),
        }
    }
}

/// Extension trait for [`ApiRouter`] to add OpenAPI documentation with Scalar UI.
pub trait RouterOpenApiExt<S> {
    /// Adds OpenAPI documentation routes with the gateway's API info.
    fn with_open_api(self, config: OpenApiConfig) -> Router<S>;

    /// Adds OpenAPI documentation routes with custom OpenAPI info.
    fn with_open_api_info(self, config: OpenApiConfig, info: Info) -> Router<S>;
}

impl<S> RouterOpenApiExt<S> for ApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_open_api(self, config: OpenApiConfig) -> Router<S> {
        let info = Info {
            title: "WebMap AI Backend".to_owned(),
            summary: Some("Travel assistant gateway for the WebMap frontend".to_owned()),
            description: Some(
                "Sentiment analysis for travel reviews, a travel chat assistant, and \
                 place recommendations and summaries backed by hosted language models."
                    .to_owned(),
            ),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            ..Info::default()
        };

        self.with_open_api_info(config, info)
    }

    fn with_open_api_info(self, config: OpenApiConfig, info: Info) -> Router<S> {
        async fn serve_openapi(Extension(api): Extension<OpenApi>) -> Json<OpenApi> {
            Json(api)
        }

        let mut api = OpenApi {
            info,
            ..OpenApi::default()
        };

        let scalar = Scalar::new(&config.open_api_json);
        let router = self
            .route(&config.scalar_ui, scalar.axum_route())
            .route(&config.open_api_json, get(serve_openapi));

        router.finish_api(&mut api).layer(Extension(api))
    }
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use webmap_inference::mock::MockProvider;

    use super::*;
    use crate::handler::routes;
    use crate::service::ServiceState;

    #[tokio::test]
    async fn serves_generated_document() -> anyhow::Result<()> {
        let state = ServiceState::new(MockProvider::new().into_service());
        let router = routes()
            .with_open_api(OpenApiConfig::default())
            .with_state(state);
        let server = TestServer::new(router)?;

        let response = server.get("/api/openapi.json").await;
        response.assert_status_ok();

        let document = response.json::<serde_json::Value>();
        assert_eq!(document["info"]["title"], "WebMap AI Backend");
        for path in [
            "/",
            "/health",
            "/analyze/sentiment",
            "/chat/travel",
            "/recommend/places",
            "/summarize/place",
        ] {
            assert!(
                document["paths"].get(path).is_some(),
                "missing path {path}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn serves_scalar_ui() -> anyhow::Result<()> {
        let state = ServiceState::new(MockProvider::new().into_service());
        let router = routes()
            .with_open_api(OpenApiConfig::default())
            .with_state(state);
        let server = TestServer::new(router)?;

        server.get("/api/scalar").await.assert_status_ok();

        Ok(())
    }
}
