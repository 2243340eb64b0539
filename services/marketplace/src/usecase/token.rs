use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;

use coleta_auth_types::token::{
    ACCESS_TOKEN_EXP, JwtClaims, REFRESH_TOKEN_EXP, TokenType, encode_token,
    validate_refresh_token,
};
use coleta_domain::user_type::UserType;

use crate::error::MarketplaceError;

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn sign(
    user_id: i32,
    user_type: UserType,
    token_type: TokenType,
    ttl: u64,
    secret: &str,
) -> Result<String, MarketplaceError> {
    let claims = JwtClaims {
        user_id,
        user_type,
        token_type,
        exp: now_secs() + ttl,
    };
    let token = encode_token(&claims, secret).context("sign jwt")?;
    Ok(token)
}

/// Issue the access/refresh pair handed out at login.
pub fn issue_token_pair(
    user_id: i32,
    user_type: UserType,
    secret: &str,
) -> Result<TokenPair, MarketplaceError> {
    Ok(TokenPair {
        access: sign(user_id, user_type, TokenType::Access, ACCESS_TOKEN_EXP, secret)?,
        refresh: sign(user_id, user_type, TokenType::Refresh, REFRESH_TOKEN_EXP, secret)?,
    })
}

/// Exchange a valid refresh token for a new access token. The refresh token
/// itself is neither rotated nor revoked.
pub fn refresh_access_token(refresh: &str, secret: &str) -> Result<String, MarketplaceError> {
    let info = validate_refresh_token(refresh, secret)?;
    sign(
        info.user_id,
        info.user_type,
        TokenType::Access,
        ACCESS_TOKEN_EXP,
        secret,
    )
}
