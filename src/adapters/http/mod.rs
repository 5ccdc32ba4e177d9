//! HTTP adapter - the gateway's axum surface.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use handlers::AppState;
pub use routes::{gateway_app, gateway_routes};
