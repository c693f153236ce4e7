// URL classification handler.
//
// POST /predict takes {"url": "..."} and responds with the verdict JSON
// the engine produced. Rule hits carry no details block; blended
// decisions include the model and heuristic components.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct PredictRequest {
    #[serde(default)]
    pub url: String,
}

/// POST /predict handler.
pub async fn predict(State(state): State<AppState>, Json(req): Json<PredictRequest>) -> Response {
    let url = req.url.trim();
    if url.is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "URL required");
    }

    match state.engine.classify(url) {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            tracing::error!(error = %e, url = %url, "Scoring failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Scoring failed")
        }
    }
}
