//! dirscope web server library.
//!
//! Exposes the router assembly so integration tests can drive the API
//! without binding a socket; the `dirscope-web` binary is a thin wrapper
//! around [`app`] plus config loading and TLS setup.

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod state;
pub mod static_files;

use axum::http::{header, Method};
use axum::middleware::from_fn;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router: the `/api` JSON endpoints plus the
/// embedded frontend as fallback, wrapped in the standard middleware stack.
///
/// `hsts` adds the Strict-Transport-Security header and should be set
/// exactly when the server terminates TLS itself.
pub fn app(state: AppState, hsts: bool) -> Router {
    // Same-origin use only needs GET; CORS stays closed to other origins.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let router = Router::new()
        .nest("/api", api::router())
        .fallback(static_files::static_handler);

    let router = if hsts {
        router.layer(from_fn(
            middleware::security_headers::security_headers_with_hsts,
        ))
    } else {
        router.layer(from_fn(middleware::security_headers::security_headers))
    };

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
