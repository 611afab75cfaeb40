//! Cross-origin policy for browser clients.

use std::time::Duration;

use axum::Router;
use axum::http::Method;
use axum::http::HeaderValue;
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, CorsLayer};

/// Origins allowed when none are configured.
const DEVELOPMENT_ORIGINS: [&str; 5] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:8080",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:8080",
];

/// Extension trait for `axum::`[`Router`] to apply security middleware.
pub trait RouterSecurityExt<S> {
    /// Layers the CORS policy described by `cors`.
    fn with_security(self, cors: &CorsConfig) -> Self;

    /// Layers the CORS policy with development origins.
    fn with_default_security(self) -> Self;
}

impl<S> RouterSecurityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_security(self, cors: &CorsConfig) -> Self {
        let cors_layer = CorsLayer::new()
            .allow_origin(cors.to_header_values())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(cors.allow_credentials)
            .max_age(cors.max_age());

        self.layer(cors_layer)
    }

    fn with_default_security(self) -> Self {
        self.with_security(&CorsConfig::default())
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration.
///
/// Origins are always enumerated and requested headers are mirrored. A
/// wildcard is never emitted, so the policy stays valid when credentials
/// are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct CorsConfig {
    /// List of allowed CORS origins.
    ///
    /// If empty, defaults to localhost origins for development.
    #[cfg_attr(
        feature = "config",
        arg(long = "cors-origins", env = "CORS_ORIGINS", value_delimiter = ',')
    )]
    pub allowed_origins: Vec<String>,

    /// Maximum age for CORS preflight requests in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long = "cors-max-age", env = "CORS_MAX_AGE", default_value = "3600")
    )]
    pub max_age_seconds: u64,

    /// Whether to allow credentials in CORS requests.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "cors-allow-credentials",
            env = "CORS_ALLOW_CREDENTIALS",
            default_value = "true",
            action = clap::ArgAction::Set
        )
    )]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age_seconds: 3600,
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Creates a configuration allowing exactly `origins`.
    pub fn with_origins<I, T>(origins: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Returns the CORS max age as a Duration.
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_seconds)
    }

    /// Converts configured origins to header values.
    ///
    /// Origins that are not valid header values are skipped.
    pub fn to_header_values(&self) -> Vec<HeaderValue> {
        if self.allowed_origins.is_empty() {
            return DEVELOPMENT_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static)
                .collect();
        }

        self.allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header;
    use axum::routing::get;
    use axum_test::TestServer;

    use super::*;

    #[test]
    fn empty_origins_fall_back_to_development() {
        let values = CorsConfig::default().to_header_values();
        assert_eq!(values.len(), DEVELOPMENT_ORIGINS.len());
        assert!(values.contains(&HeaderValue::from_static("http://localhost:5173")));
    }

    #[test]
    fn configured_origins_are_enumerated() {
        let config = CorsConfig::with_origins(["https://webmap.example", " https://maps.example "]);

        assert_eq!(
            config.to_header_values(),
            vec![
                HeaderValue::from_static("https://webmap.example"),
                HeaderValue::from_static("https://maps.example"),
            ]
        );
    }

    #[tokio::test]
    async fn allowed_origin_is_echoed() -> anyhow::Result<()> {
        let config = CorsConfig::with_origins(["https://webmap.example"]);
        let router: Router = Router::new()
            .route("/", get(|| async { "ok" }))
            .with_security(&config);
        let server = TestServer::new(router)?;

        let response = server
            .get("/")
            .add_header(header::ORIGIN, "https://webmap.example")
            .await;
        assert_eq!(
            response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            "https://webmap.example"
        );

        let response = server
            .get("/")
            .add_header(header::ORIGIN, "https://evil.example")
            .await;
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );

        Ok(())
    }

    #[tokio::test]
    async fn preflight_mirrors_requested_headers() -> anyhow::Result<()> {
        let config = CorsConfig::with_origins(["https://webmap.example"]);
        let router: Router = Router::new()
            .route("/", get(|| async { "ok" }))
            .with_security(&config);
        let server = TestServer::new(router)?;

        let response = server
            .method(Method::OPTIONS, "/")
            .add_header(header::ORIGIN, "https://webmap.example")
            .add_header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .add_header(
                header::ACCESS_CONTROL_REQUEST_HEADERS,
                "content-type,x-client-version",
            )
            .await;

        assert_eq!(
            response.header(header::ACCESS_CONTROL_ALLOW_HEADERS),
            "content-type,x-client-version"
        );
        assert_eq!(
            response.header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            "true"
        );

        Ok(())
    }
}
