//! Inference provider configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};
use webmap_inference::{DEFAULT_BASE_URL, HfClient, HfConfig, InferenceService};

use super::server::validate_timeout;
use crate::TRACING_TARGET_CONFIG;

/// HuggingFace inference provider configuration.
#[derive(Clone, Args, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Access token for the HuggingFace inference router.
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub hf_token: Option<String>,

    /// Base URL of the inference router.
    #[arg(long, env = "HF_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub hf_base_url: String,

    /// Timeout in seconds for a single provider call. Valid range: 1-300 seconds.
    #[arg(long, env = "HF_TIMEOUT", default_value_t = 30)]
    pub hf_timeout: u64,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("hf_token", &self.hf_token.as_ref().map(|_| "[REDACTED]"))
            .field("hf_base_url", &self.hf_base_url)
            .field("hf_timeout", &self.hf_timeout)
            .finish()
    }
}

impl ProviderConfig {
    /// Returns the access token, failing when it is absent or blank.
    ///
    /// `env_path` is the `.env` location reported in the error.
    pub fn api_token(&self, env_path: &Path) -> anyhow::Result<&str> {
        self.hf_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| anyhow!("HF_TOKEN not found in .env file at {}", env_path.display()))
    }

    /// Validates the configuration without building a client.
    pub fn validate(&self, env_path: &Path) -> anyhow::Result<()> {
        self.api_token(env_path)?;
        validate_timeout("Provider timeout", self.hf_timeout)?;
        Ok(())
    }

    /// Builds the HuggingFace client configuration.
    pub fn to_hf_config(&self, env_path: &Path) -> anyhow::Result<HfConfig> {
        let config = HfConfig::builder()
            .with_api_token(self.api_token(env_path)?)
            .with_base_url(&self.hf_base_url)?
            .with_timeout(Duration::from_secs(self.hf_timeout))
            .build()?;

        Ok(config)
    }

    /// Logs provider configuration at info level (the token is never logged).
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            base_url = %self.hf_base_url,
            timeout_secs = self.hf_timeout,
            token_present = self.hf_token.is_some(),
            "Provider configuration"
        );
    }
}

/// Creates the inference service from CLI configuration.
///
/// # Errors
///
/// Returns an error if the token is missing or the client cannot be built.
pub fn create_inference_service(
    config: &ProviderConfig,
    env_path: &Path,
) -> anyhow::Result<InferenceService> {
    let hf_config = config.to_hf_config(env_path)?;
    let client = HfClient::new(hf_config).context("failed to create HuggingFace client")?;
    Ok(InferenceService::new(client))
}
