//! Monitor response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Liveness banner returned by the root route.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceInfo {
    /// Human-readable banner.
    pub message: String,
    /// Always `ok`.
    pub status: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            message: "WebMap AI Backend đang chạy!".to_owned(),
            status: "ok".to_owned(),
        }
    }
}

/// Health status of the gateway.
///
/// The provider is not probed; `hf_connected` reflects that a client was
/// configured at startup.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HealthStatus {
    /// Always `healthy`.
    pub status: String,
    /// Whether an inference client is configured.
    pub hf_connected: bool,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_owned(),
            hf_connected: true,
        }
    }
}
