//! `POST /engineer` and `POST /explain`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use dairo_core::DairoError;
use dairo_core::engineering::{EngineerRequest, EngineerResponse, ExplainRequest, ExplainResponse};

use crate::app::AppState;
use crate::error::ApiError;

const INVALID_BODY_MESSAGE: &str = "Invalid request body.";

/// Rewrites the user's prompt.
///
/// Body: `{ "userPrompt": string, "persona"?: string }`.
pub async fn engineer(
    State(state): State<AppState>,
    payload: Result<Json<EngineerRequest>, JsonRejection>,
) -> Result<Json<EngineerResponse>, ApiError> {
    let request = parse_body(&state, payload).await?;
    let response = state.service.engineer(request).await?;
    Ok(Json(response))
}

/// Explains why the engineered prompt is better.
///
/// Body: `{ "originalPrompt": string, "engineeredPrompt": string }`.
pub async fn explain(
    State(state): State<AppState>,
    payload: Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let request = parse_body(&state, payload).await?;
    let response = state.service.explain(request).await?;
    Ok(Json(response))
}

/// Unwraps the body, reporting a missing credential ahead of a bad body.
async fn parse_body<T>(
    state: &AppState,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            state.service.ensure_configured().await?;
            tracing::warn!("[Routes] Rejected request body: {}", rejection.body_text());
            Err(DairoError::invalid_input(INVALID_BODY_MESSAGE).into())
        }
    }
}
