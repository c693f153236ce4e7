// Feedback submission handler.
//
// POST /feedback takes {"url": "...", "label": "...", "notes": "..."}
// and appends one row to the feedback store. The label must be one of
// the three verdict strings; anything else is a client error, as is a
// missing URL.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::feedback::FeedbackEntry;
use crate::verdict::Verdict;
use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub notes: String,
}

/// POST /feedback handler.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Response {
    let url = req.url.trim().to_string();
    let label = match req.label.trim().to_lowercase().parse::<Verdict>() {
        Ok(label) if !url.is_empty() => label,
        _ => {
            return api_error(
                StatusCode::BAD_REQUEST,
                "Provide 'url' and 'label' in {'safe','unsafe','suspicious'}",
            )
        }
    };

    let entry = FeedbackEntry {
        url,
        label,
        notes: req.notes.trim().to_string(),
    };
    match state.feedback.append(&entry).await {
        Ok(()) => Json(serde_json::json!({ "status": "ok" })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to record feedback");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to record feedback")
        }
    }
}
