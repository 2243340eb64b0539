//! Mock auth helpers for integration tests.
//!
//! Protected endpoints expect `Authorization: Bearer <access token>`.
//! `MockAuth` signs a token for an arbitrary identity so tests do not need to
//! register and log in first.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};

use coleta_auth_types::token::{ACCESS_TOKEN_EXP, JwtClaims, TokenType, encode_token};
use coleta_domain::user_type::UserType;

/// Configurable identity signed into test requests.
pub struct MockAuth {
    pub user_id: i32,
    pub user_type: UserType,
}

impl MockAuth {
    pub fn new(user_id: i32, user_type: UserType) -> Self {
        Self { user_id, user_type }
    }

    pub fn producer(user_id: i32) -> Self {
        Self::new(user_id, UserType::Producer)
    }

    pub fn collector(user_id: i32) -> Self {
        Self::new(user_id, UserType::Collector)
    }

    /// A valid access token for this identity, signed with `secret`.
    pub fn access_token(&self, secret: &str) -> String {
        let exp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + ACCESS_TOKEN_EXP;
        let claims = JwtClaims {
            user_id: self.user_id,
            user_type: self.user_type,
            token_type: TokenType::Access,
            exp,
        };
        encode_token(&claims, secret).unwrap()
    }

    /// `Authorization` header pair carrying [`Self::access_token`].
    pub fn header(&self, secret: &str) -> (HeaderName, HeaderValue) {
        let value = format!("Bearer {}", self.access_token(secret));
        (AUTHORIZATION, HeaderValue::from_str(&value).unwrap())
    }
}
