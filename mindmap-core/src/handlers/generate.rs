use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::markdown::normalize_headings;
use crate::observability::record_provider_call;
use crate::prompt::SYSTEM_PROMPT;

use super::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateMindmapRequest {
    // An absent field validates the same as an empty one, so callers get
    // the same 400 either way.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing query"))]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateMindmapResponse {
    pub markdown: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn generate_mindmap(
    State(state): State<AppState>,
    payload: Result<Json<GenerateMindmapRequest>, JsonRejection>,
) -> Result<Json<GenerateMindmapResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::info!(
        query_len = request.query.len(),
        "Received request to generate mind map"
    );

    let completion = match state.provider.complete(SYSTEM_PROMPT, &request.query).await {
        Ok(markdown) => {
            record_provider_call(state.provider.name(), "ok");
            markdown
        }
        Err(e) => {
            record_provider_call(state.provider.name(), "error");
            tracing::error!(error = %e, "Mind map generation failed");
            return Err(e.into());
        }
    };

    let markdown = if state.normalize_headings {
        let normalized = normalize_headings(&completion);
        if normalized.is_empty() {
            return Err(AppError::Unexpected(anyhow::anyhow!(
                "completion was empty after normalization"
            )));
        }
        normalized
    } else {
        completion
    };

    tracing::info!("Mind map generation successful");

    Ok(Json(GenerateMindmapResponse { markdown }))
}
