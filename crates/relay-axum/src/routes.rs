//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the broadcaster held in `AppState`.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Relay routes without state applied.
pub(crate) fn relay_routes() -> Router<AppState> {
    Router::new()
        // Client
        .route("/", get(handlers::pages::index))
        .route("/chat.js", get(handlers::pages::script))
        // Send path
        .route("/chat", get(handlers::chat::send))
        // Stream path (SSE)
        .route("/sse", get(handlers::events::stream))
        // JSON samples
        .route("/echo", get(handlers::echo::echo))
        .route("/json", get(handlers::echo::sample))
}

/// Create the main Axum router with all relay routes.
///
/// Unmatched paths get a JSON 404. For serving an extra asset directory,
/// use [`create_static_router`].
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    with_layers(base_router(ctx).fallback(handlers::pages::not_found), cors_config)
}

/// Create a router with relay routes plus static files from `static_dir`.
///
/// Relay routes take priority; other paths are looked up in `static_dir`
/// and fall back to the JSON 404.
pub fn create_static_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let serve_dir = ServeDir::new(static_dir.as_ref())
        .not_found_service(handlers::pages::not_found.into_service());

    with_layers(base_router(ctx).fallback_service(serve_dir), cors_config)
}

fn base_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(relay_routes().with_state(state))
}

fn with_layers(router: Router, cors_config: &CorsConfig) -> Router {
    router
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
