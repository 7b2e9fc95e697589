use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::kernel::ConnectionState;
use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    storage: ConnectionState,
}

/// Health check endpoint
///
/// Reports the storage connection state tracked by the connection monitor.
/// Returns 200 OK when connected, 503 Service Unavailable when degraded or
/// disconnected.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let storage = state.kernel.connection.state();

    let (status_code, status) = if storage.is_ready() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (status_code, Json(HealthResponse { status, storage }))
}
