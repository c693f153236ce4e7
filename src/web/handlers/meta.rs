// Service metadata handler.
//
// GET / reports the service name, version and routes. Useful as a
// quick smoke check for deployments and as a discovery document for
// clients that probe before posting.

use axum::Json;

/// GET / handler.
pub async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "weir",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "predict": "POST /predict",
            "feedback": "POST /feedback",
            "health": "GET /health",
        },
    }))
}
