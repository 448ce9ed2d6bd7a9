//! Question route handler.

use askgraph_core::{AskError, AskReport, Silent};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Error body returned when a request ends early.
#[derive(Debug, Serialize)]
pub struct AskFailure {
    pub stage: String,
    pub error: String,
}

/// POST /api/ask - Answer one question.
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskReport>, (StatusCode, Json<AskFailure>)> {
    let report = state
        .pipeline
        .ask(&req.question, &mut Silent)
        .await
        .map_err(failure)?;

    Ok(Json(report))
}

fn failure(err: AskError) -> (StatusCode, Json<AskFailure>) {
    let status = match err {
        AskError::EmptyQuestion => StatusCode::BAD_REQUEST,
        AskError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AskError::Generation(_) | AskError::Execution(_) | AskError::Summarization(_) => StatusCode::BAD_GATEWAY,
    };

    if status != StatusCode::BAD_REQUEST {
        tracing::error!(stage = err.stage(), error = %err, "Request failed");
    }

    (
        status,
        Json(AskFailure {
            stage: err.stage().to_string(),
            error: err.to_string(),
        }),
    )
}
