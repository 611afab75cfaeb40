//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── server: ServerConfig          # Host, port, shutdown
//! ├── middleware: MiddlewareConfig  # CORS, OpenAPI, request timeout
//! ├── provider: ProviderConfig      # HuggingFace token, base URL, timeout
//! └── log_format: LogFormat         # text or json
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.

mod middleware;
mod provider;
mod server;

use std::path::{Path, PathBuf};
use std::{env, process};

use anyhow::Context;
use clap::{Parser, ValueEnum};
pub use middleware::MiddlewareConfig;
pub use provider::{ProviderConfig, create_inference_service};
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_SERVER_STARTUP};

/// Name of the environment file looked up at startup.
const ENV_FILE: &str = ".env";

/// Output format of the log lines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "webmap")]
#[command(about = "WebMap AI Backend: travel assistant gateway")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration (CORS, OpenAPI, timeouts).
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// Inference provider configuration.
    #[clap(flatten)]
    pub provider: ProviderConfig,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Loads environment variables from .env files (if enabled) and parses CLI arguments.
    ///
    /// The files are loaded before clap parses arguments so that clap's `env`
    /// fallbacks can pick up their values.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Returns the `.env` path next to the executable.
    ///
    /// Falls back to the working directory when the executable path is unknown.
    pub fn env_file_path() -> PathBuf {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(ENV_FILE)))
            .unwrap_or_else(|| Path::new(ENV_FILE).to_path_buf())
    }

    /// Loads `.env` next to the executable, then from the working directory.
    ///
    /// Values already present in the environment are never overridden.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::from_path(Self::env_file_path())
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }

        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    ///
    /// `RUST_LOG` controls the filter and defaults to `info`.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(filter);

        match self.log_format {
            LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json())
                .init(),
        }
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.middleware
            .validate()
            .context("invalid middleware configuration")?;
        self.provider
            .validate(&Self::env_file_path())
            .context("invalid provider configuration")?;
        self.validate_timeout_order()
    }

    /// Requires the provider timeout to expire before the request timeout.
    ///
    /// Otherwise a slow provider surfaces as a gateway timeout instead of
    /// the per-operation failure policy.
    fn validate_timeout_order(&self) -> anyhow::Result<()> {
        let provider_timeout = self.provider.hf_timeout;
        let request_timeout = self.middleware.recovery.request_timeout;

        if provider_timeout >= request_timeout {
            anyhow::bail!(
                "Provider timeout {provider_timeout} seconds must be shorter than the \
                 request timeout {request_timeout} seconds."
            );
        }

        Ok(())
    }

    /// Logs configuration (no sensitive information).
    pub fn log(&self) {
        Self::log_build_info();
        self.server.log();
        self.middleware.log();
        self.provider.log();

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            log_format = ?self.log_format,
            "Logging configuration"
        );
    }

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_SERVER_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "webmap",
            "--hf-token",
            "hf_test",
            "--port",
            "9000",
            "--log-format",
            "json",
            "--cors-origins",
            "https://a.example,https://b.example",
        ])
        .unwrap();

        assert_eq!(cli.server.port, 9000);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.provider.hf_token.as_deref(), Some("hf_test"));
        assert_eq!(cli.middleware.cors.allowed_origins.len(), 2);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn reject_provider_timeout_not_below_request_timeout() {
        for (hf_timeout, request_timeout) in [("120", "60"), ("60", "60")] {
            let cli = Cli::try_parse_from([
                "webmap",
                "--hf-token",
                "hf_test",
                "--hf-timeout",
                hf_timeout,
                "--request-timeout",
                request_timeout,
            ])
            .unwrap();

            let error = cli.validate().unwrap_err();
            assert!(error.to_string().contains("must be shorter than"));
        }
    }

    #[test]
    fn accept_provider_timeout_below_request_timeout() {
        let cli = Cli::try_parse_from([
            "webmap",
            "--hf-token",
            "hf_test",
            "--hf-timeout",
            "59",
            "--request-timeout",
            "60",
        ])
        .unwrap();

        assert!(cli.validate().is_ok());
    }

    #[test]
    fn env_file_is_named_dotenv() {
        assert_eq!(
            Cli::env_file_path().file_name(),
            Some(std::ffi::OsStr::new(ENV_FILE))
        );
    }
}
