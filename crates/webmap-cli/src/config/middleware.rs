//! Middleware configuration for the HTTP server.
//!
//! All middleware configs are re-exported from `webmap-server` and support
//! both CLI arguments and environment variables.
//!
//! ```bash
//! webmap --cors-origins "https://webmap.example" --request-timeout 60
//! ```

use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};
use webmap_server::middleware::{CorsConfig, OpenApiConfig, RecoveryConfig};

use super::server::validate_timeout;
use crate::TRACING_TARGET_CONFIG;

/// Middleware configuration combining CORS, OpenAPI, and recovery settings.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS (Cross-Origin Resource Sharing) configuration.
    #[clap(flatten)]
    pub cors: CorsConfig,

    /// OpenAPI documentation configuration.
    #[clap(flatten)]
    pub openapi: OpenApiConfig,

    /// Recovery middleware configuration.
    #[clap(flatten)]
    pub recovery: RecoveryConfig,
}

impl MiddlewareConfig {
    /// Validates the request timeout and the documentation paths.
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_timeout("Request timeout", self.recovery.request_timeout)
            .context("invalid recovery configuration")?;

        for path in [&self.openapi.open_api_json, &self.openapi.scalar_ui] {
            if !path.starts_with('/') {
                anyhow::bail!("OpenAPI path '{path}' must start with '/'");
            }
        }

        Ok(())
    }

    /// Logs middleware configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            origins = ?self.cors.allowed_origins,
            credentials = self.cors.allow_credentials,
            max_age_secs = self.cors.max_age_seconds,
            "CORS configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            openapi_path = %self.openapi.open_api_json,
            scalar_path = %self.openapi.scalar_ui,
            "OpenAPI configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            request_timeout_secs = self.recovery.request_timeout,
            "Recovery configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MiddlewareConfig {
        MiddlewareConfig {
            cors: CorsConfig::default(),
            openapi: OpenApiConfig::default(),
            recovery: RecoveryConfig::default(),
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn reject_out_of_range_request_timeout() {
        let mut config = config();
        config.recovery = RecoveryConfig::with_timeout_secs(0);
        assert!(config.validate().is_err());

        config.recovery = RecoveryConfig::with_timeout_secs(301);
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_relative_openapi_path() {
        let mut config = config();
        config.openapi.scalar_ui = "scalar".to_owned();
        assert!(config.validate().is_err());
    }
}
