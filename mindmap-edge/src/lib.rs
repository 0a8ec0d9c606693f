//! Edge deployment of the mind map relay.
//!
//! Serverless hosts hand over one request at a time: there is no listener
//! and no startup phase. Each invocation reads its configuration from the
//! environment, assembles the shared router, and drives it to a single
//! response. A missing credential therefore surfaces as a per-request 500
//! instead of a boot failure.
//!
//! The entry point is a plain `Request -> Response` async function, so any
//! function host that can hand us an `http` request can mount it.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tower::util::ServiceExt;

use mindmap_core::config::RelayConfig;
use mindmap_core::gateway::{CompletionProvider, GroqCompletionProvider};
use mindmap_core::handlers::{build_router, AppState};

/// Serve one request with configuration read from the environment.
pub async fn handle(request: Request<Body>) -> Response {
    handle_with_config(RelayConfig::from_env(), request).await
}

/// Serve one request with explicit configuration. Tests and embedding
/// hosts use this to avoid process-global environment mutation.
pub async fn handle_with_config(config: RelayConfig, request: Request<Body>) -> Response {
    let provider: Arc<dyn CompletionProvider> =
        Arc::new(GroqCompletionProvider::new(config.groq.clone()));

    let router = build_router(AppState {
        provider,
        normalize_headings: config.normalize_headings,
    });

    match router.oneshot(request).await {
        Ok(response) => response,
        Err(infallible) => match infallible {},
    }
}
