//! booky-server: HTTP API server for the Booky book catalog
//!
//! This crate provides:
//! - REST endpoints for books, authors, and publications
//! - Cross-reference lookups (by ISBN, category, language, book)
//! - JSON error responses of the form `{ "error": "<message>" }`
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! # Usage
//!
//! ```rust,ignore
//! use booky_server::{build_app, config::ServerConfig, state::AppState};
//! use booky_store::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::from_env())?;
//! let state = AppState::new(store, ServerConfig::from_env()?);
//! axum::serve(listener, build_app(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsOrigins;
use crate::middleware::request_id::{propagate_request_id, request_id_layer, trace_layer};

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use booky_core;
pub use booky_store;

/// Build the router with the full middleware stack.
///
/// Layers run outermost first: request ID, ID propagation, CORS, tracing.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config().cors_allowed_origins);

    routes::build_router(state)
        .layer(trace_layer())
        .layer(cors)
        .layer(axum::middleware::from_fn(propagate_request_id))
        .layer(request_id_layer())
}

/// Build CORS layer from configuration.
fn build_cors_layer(allowed_origins: &CorsOrigins) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match allowed_origins {
        CorsOrigins::Any => layer.allow_origin(Any),
        CorsOrigins::List(origins) => layer.allow_origin(origins.clone()),
    }
}
