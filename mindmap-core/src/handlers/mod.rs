pub mod generate;
pub mod health;
pub mod metrics;

pub use generate::{generate_mindmap, GenerateMindmapRequest, GenerateMindmapResponse};
pub use health::{health_check, readiness_check};

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::gateway::CompletionProvider;
use crate::middleware::{metrics_middleware, request_id_middleware};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
    pub normalize_headings: bool,
}

/// Assemble the relay's HTTP surface. Both deployment shapes serve this
/// exact router, so the contract cannot drift between them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics::metrics))
        .route("/generate-mindmap", post(generate_mindmap))
        .with_state(state)
        // Add metrics middleware
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        // The CORS layer emits the grant headers only on the OPTIONS
        // answers it produces itself; the contract wants all three on
        // every response, so set them on the way out here too.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        // Add CORS layer. It short-circuits every OPTIONS request, so the
        // router carries no OPTIONS route of its own.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}
