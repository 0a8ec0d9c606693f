use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use super::AppState;

/// Liveness probe. Answers from local state only; a broken upstream or a
/// missing credential must not take the process out of rotation.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Readiness probe for K8s readiness checks. Verifies the completion
/// provider is configured well enough to serve a request.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.provider.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "checks": {
                    (state.provider.name()): "up"
                }
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Provider readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unready",
                    "checks": {
                        (state.provider.name()): "down"
                    }
                })),
            )
        }
    }
}
