use axum::Json;
use axum::http::StatusCode;
use chrono::{SecondsFormat, Utc};

/// Handler for `GET /health` — liveness check with a timestamp body,
/// matching the legacy wire shape `{"status": "OK", "timestamp": ...}`.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    let body = serde_json::json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    });
    (StatusCode::OK, Json(body))
}
