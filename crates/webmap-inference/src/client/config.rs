//! HuggingFace client configuration.
//!
//! This module provides the configuration structure and builder for the
//! [`HfClient`](super::HfClient).

use std::fmt;
use std::time::Duration;

use derive_builder::Builder;
use url::Url;

use crate::error::{Error, Result};

/// Default base URL of the HuggingFace inference router.
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co";

/// Default timeout for a single provider round-trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound accepted for either timeout.
const MAX_TIMEOUT: Duration = Duration::from_secs(300);

/// Configuration for the HuggingFace client.
///
/// The access token is required; every other setting has a default.
#[derive(Clone, Builder)]
#[builder(
    name = "HfBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate_config", error = "Error")
)]
pub struct HfConfig {
    /// Access token sent as a bearer credential.
    pub api_token: String,
    /// Base URL of the inference router.
    #[builder(setter(custom), default = "HfConfig::default_base_url()")]
    pub base_url: Url,
    /// Timeout for a single request, including reading the body.
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub timeout: Duration,
    /// Timeout for establishing a connection.
    #[builder(default = "DEFAULT_CONNECT_TIMEOUT")]
    pub connect_timeout: Duration,
    /// User agent string for requests.
    #[builder(default = "HfConfig::default_user_agent()")]
    pub user_agent: String,
}

impl fmt::Debug for HfConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HfConfig")
            .field("api_token", &"[REDACTED]")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl HfConfig {
    /// Create a new configuration builder.
    pub fn builder() -> HfBuilder {
        HfBuilder::default()
    }

    fn default_base_url() -> Url {
        Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
    }

    fn default_user_agent() -> String {
        format!("webmap-inference/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl HfBuilder {
    /// Set the base URL of the inference router.
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| {
            Error::configuration()
                .with_message(format!("invalid base URL '{url}': {e}"))
                .with_source(e)
        })?;

        self.base_url = Some(parsed);
        Ok(self)
    }

    fn validate_config(&self) -> std::result::Result<(), String> {
        if let Some(token) = &self.api_token
            && token.trim().is_empty()
        {
            return Err("API token must not be empty".to_owned());
        }

        if let Some(url) = &self.base_url
            && !matches!(url.scheme(), "http" | "https")
        {
            return Err(format!(
                "base URL must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if let Some(timeout) = &self.timeout
            && (timeout.is_zero() || *timeout > MAX_TIMEOUT)
        {
            return Err(format!(
                "timeout must be between 1 and {} seconds",
                MAX_TIMEOUT.as_secs()
            ));
        }

        if let Some(connect_timeout) = &self.connect_timeout
            && (connect_timeout.is_zero() || *connect_timeout > MAX_TIMEOUT)
        {
            return Err(format!(
                "connect timeout must be between 1 and {} seconds",
                MAX_TIMEOUT.as_secs()
            ));
        }

        Ok(())
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::configuration().with_message(message)
    }
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(error: derive_builder::UninitializedFieldError) -> Self {
        Error::configuration()
            .with_message(format!("missing required field: {}", error.field_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let config = HfConfig::builder()
            .with_api_token("hf_test")
            .build()
            .expect("valid config");

        assert_eq!(config.base_url.as_str(), "https://router.huggingface.co/");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert!(config.user_agent.starts_with("webmap-inference/"));
    }

    #[test]
    fn builder_requires_token() {
        let error = HfConfig::builder().build().unwrap_err();
        assert_eq!(error.kind(), crate::ErrorKind::Configuration);
        assert!(error.to_string().contains("api_token"));
    }

    #[test]
    fn rejects_blank_token() {
        assert!(HfConfig::builder().with_api_token("   ").build().is_err());
    }

    #[test]
    fn custom_base_url() {
        let config = HfConfig::builder()
            .with_api_token("hf_test")
            .with_base_url("http://127.0.0.1:9000")
            .expect("valid URL")
            .build()
            .expect("valid config");

        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(HfConfig::builder().with_base_url("not a url").is_err());
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = HfConfig::builder()
            .with_api_token("hf_test")
            .with_base_url("ftp://example.com")
            .expect("parseable URL")
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let result = HfConfig::builder()
            .with_api_token("hf_test")
            .with_timeout(Duration::ZERO)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn debug_redacts_token() {
        let config = HfConfig::builder()
            .with_api_token("hf_secret")
            .build()
            .expect("valid config");

        let debug = format!("{config:?}");
        assert!(!debug.contains("hf_secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
