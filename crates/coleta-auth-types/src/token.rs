//! JWT claims, issuance and validation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use coleta_core::error::error_response;
use coleta_domain::user_type::UserType;

/// Access-token lifetime in seconds (60 minutes).
pub const ACCESS_TOKEN_EXP: u64 = 3600;

/// Refresh-token lifetime in seconds (24 hours).
pub const REFRESH_TOKEN_EXP: u64 = 86400;

/// Distinguishes the two tokens handed out at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Identity extracted from a validated token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    pub user_id: i32,
    pub user_type: UserType,
    pub exp: u64,
}

/// Authentication failures. Every variant answers 401.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("authentication credentials were not provided")]
    MissingToken,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("wrong token type")]
    WrongTokenType,
    #[error("this endpoint is restricted to {0} accounts")]
    WrongUserType(UserType),
}

impl AuthError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidSignature | Self::Malformed | Self::WrongTokenType => "INVALID_TOKEN",
            Self::Expired => "TOKEN_EXPIRED",
            Self::WrongUserType(_) => "WRONG_USER_TYPE",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        error_response(StatusCode::UNAUTHORIZED, self.kind(), self.to_string())
    }
}

/// JWT claims payload shared by token issuance and validation.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `user_id` | row id in the table named by `user_type` |
/// | `user_type` | `producer`, `collector` or `cooperative` |
/// | `token_type` | `access` or `refresh` |
/// | `exp` | expiration, seconds since UNIX epoch |
///
/// [`Serialize`] requires the **`USE_ONLY_IN_TOKEN_ISSUER`** feature; only the
/// service that signs tokens (and test helpers) enable it.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_TOKEN_ISSUER", test), derive(Serialize))]
pub struct JwtClaims {
    pub user_id: i32,
    pub user_type: UserType,
    pub token_type: TokenType,
    pub exp: u64,
}

// ── Core decode (private) ────────────────────────────────────────────────

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked with the default 60s leeway.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

fn expect_type(claims: JwtClaims, expected: TokenType) -> Result<TokenInfo, AuthError> {
    if claims.token_type != expected {
        return Err(AuthError::WrongTokenType);
    }
    Ok(TokenInfo {
        user_id: claims.user_id,
        user_type: claims.user_type,
        exp: claims.exp,
    })
}

// ── Public: all consumers ────────────────────────────────────────────────

/// Validate a bearer access token, returning the caller's identity.
///
/// Refresh tokens are rejected with [`AuthError::WrongTokenType`].
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    expect_type(decode_jwt(token, secret)?, TokenType::Access)
}

// ── Feature-gated: token issuer only ─────────────────────────────────────

/// Validate a refresh token. Used by the issuer's refresh flow.
#[cfg(any(feature = "USE_ONLY_IN_TOKEN_ISSUER", test))]
pub fn validate_refresh_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    expect_type(decode_jwt(token, secret)?, TokenType::Refresh)
}

/// Sign claims with HS256.
#[cfg(any(feature = "USE_ONLY_IN_TOKEN_ISSUER", test))]
pub fn encode_token(claims: &JwtClaims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
}
