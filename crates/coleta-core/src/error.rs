use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Build the JSON error body every Coleta endpoint answers with:
/// `{"kind": "<SCREAMING_SNAKE>", "detail": "<human readable>"}`.
///
/// Callers log 5xx causes themselves before building the body; tower-http
/// `TraceLayer` already records method/uri/status for every request.
pub fn error_response(status: StatusCode, kind: &'static str, detail: String) -> Response {
    let body = serde_json::json!({
        "kind": kind,
        "detail": detail,
    });
    (status, axum::Json(body)).into_response()
}
