//! Bearer-token identity extractor.

use axum::extract::FromRequestParts;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use http::request::Parts;

use coleta_domain::user_type::UserType;

use crate::token::{AuthError, validate_access_token};

/// Access to the HMAC secret used to validate access tokens.
///
/// Implemented by each service's shared state so [`Identity`] can be extracted
/// from any router built on it.
pub trait TokenSecret {
    fn token_secret(&self) -> &str;
}

/// Caller identity taken from `Authorization: Bearer <access token>`.
///
/// Rejects with 401 when the header is absent or the token does not validate.
/// Actor-type enforcement is done by handlers through [`Identity::require`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub user_type: UserType,
}

impl Identity {
    /// Return the caller's id if they are of the `expected` type.
    pub fn require(&self, expected: UserType) -> Result<i32, AuthError> {
        if self.user_type == expected {
            Ok(self.user_id)
        } else {
            Err(AuthError::WrongUserType(expected))
        }
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: TokenSecret + Send + Sync,
{
    type Rejection = AuthError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send`. Validate
    // synchronously and hand back a 'static async block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(AuthError::MissingToken)
            .and_then(|header| validate_access_token(header.token(), state.token_secret()));

        async move {
            let info = result?;
            Ok(Self {
                user_id: info.user_id,
                user_type: info.user_type,
            })
        }
    }
}
