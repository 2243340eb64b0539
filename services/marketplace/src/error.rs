use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use coleta_auth_types::token::AuthError;
use coleta_core::error::error_response;
use coleta_domain::status::{CollectionStatus, UnknownStatus};

/// Marketplace service error variants.
#[derive(Debug, thiserror::Error)]
pub enum MarketplaceError {
    #[error("{0}")]
    Validation(String),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("email already registered")]
    EmailAlreadyRegistered,
    #[error("document already registered")]
    DocumentAlreadyRegistered,
    /// Same body for unknown identifier and wrong password.
    #[error("no active account found with the given credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("collection request not found")]
    RequestNotFound,
    #[error("collection request is not available")]
    RequestNotAvailable,
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("cannot change status from {from} to {to}")]
    InvalidTransition {
        from: CollectionStatus,
        to: CollectionStatus,
    },
    #[error("status was changed by another request")]
    StatusConflict,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl MarketplaceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            Self::DocumentAlreadyRegistered => "DOCUMENT_ALREADY_REGISTERED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Auth(e) => e.kind(),
            Self::RequestNotFound => "REQUEST_NOT_FOUND",
            Self::RequestNotAvailable => "REQUEST_NOT_AVAILABLE",
            Self::UnknownStatus(_) => "INVALID_STATUS",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::StatusConflict => "STATUS_CONFLICT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::InvalidBody(_)
            | Self::EmailAlreadyRegistered
            | Self::DocumentAlreadyRegistered
            | Self::RequestNotAvailable
            | Self::UnknownStatus(_)
            | Self::InvalidTransition { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::RequestNotFound => StatusCode::NOT_FOUND,
            Self::StatusConflict => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for MarketplaceError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        error_response(self.status(), self.kind(), self.to_string())
    }
}

impl From<JsonRejection> for MarketplaceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for MarketplaceError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<UnknownStatus> for MarketplaceError {
    fn from(e: UnknownStatus) -> Self {
        Self::UnknownStatus(e.0)
    }
}
