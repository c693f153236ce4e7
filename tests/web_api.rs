// HTTP API tests driven through the router with tower's oneshot.
//
// No sockets are bound: each test builds the full router (routes, CORS,
// tracing layers) around a scorer double and fires one request at it.
// Feedback tests write under a per-test temp directory and clean up.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use weir::engine::Engine;
use weir::features::FEATURE_COUNT;
use weir::feedback::CsvFeedbackStore;
use weir::model::traits::{NoopScorer, SparseVector, UrlScorer};
use weir::rules::lists::WatchLists;
use weir::web::{build_router, AppState};

/// Scorer double pinned to one probability.
struct FixedScorer(f64);

impl UrlScorer for FixedScorer {
    fn vectorize(&self, _url: &str) -> SparseVector {
        SparseVector::default()
    }

    fn scale(&self, _features: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        vec![0.0; FEATURE_COUNT]
    }

    fn predict_probability(&self, _text: &SparseVector, _scaled: &[f64]) -> Result<f64> {
        Ok(self.0)
    }
}

fn feedback_path(dir: &str) -> PathBuf {
    std::env::temp_dir().join(dir).join("feedback.csv")
}

fn router_with(scorer: Box<dyn UrlScorer>, feedback_dir: &str) -> Router {
    let state = AppState {
        engine: Arc::new(Engine::new(WatchLists::default(), scorer)),
        feedback: Arc::new(CsvFeedbackStore::new(feedback_path(feedback_dir))),
    };
    build_router(state)
}

async fn post_json(
    router: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ============================================================
// POST /predict
// ============================================================

#[tokio::test]
async fn predict_returns_rule_verdict() {
    let router = router_with(Box::new(NoopScorer), "weir-web-rule");
    let (status, v) = post_json(router, "/predict", json!({"url": "https://github.com"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["prediction"], "safe");
    assert_eq!(v["confidence"], "99.9");
    assert_eq!(v["reason"], "Known trusted domain (github.com) with HTTPS");
    assert!(v.get("details").is_none());
}

#[tokio::test]
async fn predict_returns_blended_verdict_with_details() {
    let router = router_with(Box::new(FixedScorer(0.2)), "weir-web-blend");
    let (status, v) = post_json(
        router,
        "/predict",
        json!({"url": "https://bluewidgets.example/catalog"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["prediction"], "safe");
    assert_eq!(v["confidence"], "15.0");
    assert_eq!(v["reason"], "Blended model and heuristic assessment");
    assert_eq!(v["details"]["ml_probability"], 0.2);
    assert_eq!(v["details"]["rule_adjustment"], 0.0);
}

#[tokio::test]
async fn predict_rejects_missing_url() {
    let router = router_with(Box::new(NoopScorer), "weir-web-missing");
    let (status, v) = post_json(router, "/predict", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"], "URL required");
}

#[tokio::test]
async fn predict_rejects_whitespace_url() {
    let router = router_with(Box::new(NoopScorer), "weir-web-blank");
    let (status, v) = post_json(router, "/predict", json!({"url": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"], "URL required");
}

#[tokio::test]
async fn predict_without_model_is_a_server_error() {
    // A URL no rule claims needs the scorer, and NoopScorer has nothing
    // to offer.
    let router = router_with(Box::new(NoopScorer), "weir-web-fail");
    let (status, v) = post_json(
        router,
        "/predict",
        json!({"url": "https://bluewidgets.example/catalog"}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(v["error"], "Scoring failed");
}

#[tokio::test]
async fn predict_requires_json_content_type() {
    let router = router_with(Box::new(NoopScorer), "weir-web-ctype");
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .body(Body::from(r#"{"url":"https://github.com"}"#))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// ============================================================
// POST /feedback
// ============================================================

#[tokio::test]
async fn feedback_appends_a_row() {
    let path = feedback_path("weir-web-feedback");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());

    let router = router_with(Box::new(NoopScorer), "weir-web-feedback");
    let (status, v) = post_json(
        router,
        "/feedback",
        json!({
            "url": "http://phish.example.net/login",
            "label": "unsafe",
            "notes": "came by SMS"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["status"], "ok");

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "timestamp,url,label,notes");
    assert!(lines[1].contains("http://phish.example.net/login,unsafe,came by SMS"));

    // Cleanup
    std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[tokio::test]
async fn feedback_accepts_mixed_case_labels() {
    let path = feedback_path("weir-web-label-case");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());

    let router = router_with(Box::new(NoopScorer), "weir-web-label-case");
    let (status, _) = post_json(
        router,
        "/feedback",
        json!({"url": "https://a.example", "label": " Suspicious "}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("https://a.example,suspicious,"));

    // Cleanup
    std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[tokio::test]
async fn feedback_trims_notes_whitespace() {
    let path = feedback_path("weir-web-notes");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());

    let router = router_with(Box::new(NoopScorer), "weir-web-notes");
    let (status, _) = post_json(
        router,
        "/feedback",
        json!({
            "url": "https://b.example",
            "label": "unsafe",
            "notes": "  flagged by a reader  "
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(
        lines[1].ends_with("https://b.example,unsafe,flagged by a reader"),
        "notes not trimmed: {}",
        lines[1]
    );

    // Cleanup
    std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[tokio::test]
async fn feedback_rejects_unknown_label() {
    let router = router_with(Box::new(NoopScorer), "weir-web-badlabel");
    let (status, v) = post_json(
        router,
        "/feedback",
        json!({"url": "https://a.example", "label": "danger"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        v["error"],
        "Provide 'url' and 'label' in {'safe','unsafe','suspicious'}"
    );
}

#[tokio::test]
async fn feedback_rejects_missing_url() {
    let router = router_with(Box::new(NoopScorer), "weir-web-nourl");
    let (status, _) = post_json(router, "/feedback", json!({"label": "safe"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================
// GET / and /health, routing and CORS
// ============================================================

#[tokio::test]
async fn health_always_ok() {
    let router = router_with(Box::new(NoopScorer), "weir-web-health");
    let (status, v) = get_json(router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["status"], "ok");
}

#[tokio::test]
async fn root_reports_service_metadata() {
    let router = router_with(Box::new(NoopScorer), "weir-web-meta");
    let (status, v) = get_json(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["service"], "weir");
    assert!(v["version"].is_string());
    assert_eq!(v["endpoints"]["predict"], "POST /predict");
    assert_eq!(v["endpoints"]["feedback"], "POST /feedback");
    assert_eq!(v["endpoints"]["health"], "GET /health");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let router = router_with(Box::new(NoopScorer), "weir-web-404");
    let request = Request::builder()
        .uri("/nope")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    // Browser extensions call this API cross-origin, so the preflight
    // must come back permissive.
    let router = router_with(Box::new(NoopScorer), "weir-web-cors");
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/predict")
        .header(header::ORIGIN, "https://extension.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok());
    assert_eq!(allowed, Some("*"));
}
