use std::fmt::Display;

use axum::http::StatusCode;

/// `GET /healthz`: liveness. Answering at all is enough.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Map the outcome of a dependency probe to a `GET /readyz` status.
///
/// Services run their own probe (e.g. a database ping) and pass the result here.
pub fn readiness<E: Display>(probe: Result<(), E>) -> StatusCode {
    match probe {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
