//! Liveness and health check handlers.
//!
//! Neither route touches the inference provider.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;

use crate::extract::Json;
use crate::handler::response::{HealthStatus, ServiceInfo};
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "webmap_server::handler::monitors";

/// Returns the liveness banner.
#[tracing::instrument(skip_all)]
async fn service_info() -> (StatusCode, Json<ServiceInfo>) {
    tracing::trace!(target: TRACING_TARGET, "Service info requested");
    (StatusCode::OK, Json(ServiceInfo::default()))
}

fn service_info_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Service info")
        .description("Returns a static banner confirming the gateway is running.")
        .response::<200, Json<ServiceInfo>>()
}

/// Returns the health status.
#[tracing::instrument(skip_all)]
async fn health_status() -> (StatusCode, Json<HealthStatus>) {
    let response = HealthStatus::default();

    tracing::debug!(
        target: TRACING_TARGET,
        hf_connected = response.hf_connected,
        "Health status requested"
    );

    (StatusCode::OK, Json(response))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health status")
        .description("Reports the gateway as healthy. The provider is not probed.")
        .response::<200, Json<HealthStatus>>()
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/", get_with(service_info, service_info_docs))
        .api_route("/health", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Monitors"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn root_returns_banner() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes())?;

        let response = server.get("/").await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "message": "WebMap AI Backend đang chạy!",
            "status": "ok"
        }));

        Ok(())
    }

    #[tokio::test]
    async fn health_reports_connected() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes())?;

        let response = server.get("/health").await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "status": "healthy",
            "hf_connected": true
        }));

        Ok(())
    }
}
