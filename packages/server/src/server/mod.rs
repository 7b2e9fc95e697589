// HTTP server setup (Axum + JSON)
pub mod app;
pub mod error;
pub mod routes;

pub use app::*;
pub use error::ApiError;
