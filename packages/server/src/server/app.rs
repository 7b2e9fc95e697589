//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerKernel;
use crate::server::routes::{
    create_job_handler, delete_job_handler, health_handler, list_jobs_handler,
};

/// Upper bound on a whole request, including storage round trips.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub kernel: Arc<ServerKernel>,
}

/// Build the Axum application router
pub fn build_app(kernel: Arc<ServerKernel>) -> Router {
    let app_state = AxumAppState { kernel };

    // CORS configuration - the browser client is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/jobs", get(list_jobs_handler))
        .route("/jobs/:id", delete(delete_job_handler))
        .route("/create/job", post(create_job_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
