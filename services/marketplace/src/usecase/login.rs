use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand_core::OsRng;

use coleta_domain::user_type::UserType;

use crate::domain::repository::AccountRepository;
use crate::domain::types::{Credential, LookupField};
use crate::error::MarketplaceError;
use crate::usecase::token::{TokenPair, issue_token_pair};

// ── Password hashing ─────────────────────────────────────────────────────────

/// Hash a password with Argon2id and a fresh random salt (PHC string).
pub fn hash_password(password: &str) -> Result<String, MarketplaceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| MarketplaceError::Internal(anyhow!("hash password: {e}")))
}

/// Verify a password against a stored PHC string. A corrupt hash never matches.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "stored password hash is not a valid PHC string");
            false
        }
    }
}

/// Well-formed Argon2id hash with the default cost parameters. Unknown
/// identifiers are verified against it so they cost as much as a wrong password.
const UNKNOWN_ACCOUNT_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$vhhFHtXYr09E0lBMrD+N2w$qct0+4hC+zsvwFqAXWgzuhbXs/Dt2j3WUMGm3USM64E";

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email_or_document: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub tokens: TokenPair,
    pub user_id: i32,
    pub user_type: UserType,
    pub name: String,
}

/// Resolves an identifier across the three account tables.
///
/// Email is tried first in producer, collector, cooperative order, then
/// document in the same order. The first matching row is the only candidate.
pub struct LoginUseCase<P, C, K>
where
    P: AccountRepository,
    C: AccountRepository,
    K: AccountRepository,
{
    pub producers: P,
    pub collectors: C,
    pub cooperatives: K,
    pub jwt_secret: String,
}

impl<P, C, K> LoginUseCase<P, C, K>
where
    P: AccountRepository,
    C: AccountRepository,
    K: AccountRepository,
{
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, MarketplaceError> {
        let identifier = input.email_or_document.trim();
        if identifier.is_empty() || input.password.is_empty() {
            return Err(MarketplaceError::InvalidCredentials);
        }

        let mut credential = None;
        for field in [LookupField::Email, LookupField::Document] {
            credential = self.find_in_order(field, identifier).await?;
            if credential.is_some() {
                break;
            }
        }

        let Some(credential) = credential else {
            verify_password(&input.password, UNKNOWN_ACCOUNT_HASH);
            return Err(MarketplaceError::InvalidCredentials);
        };
        if !verify_password(&input.password, &credential.password_hash) {
            return Err(MarketplaceError::InvalidCredentials);
        }

        let tokens = issue_token_pair(credential.user_id, credential.user_type, &self.jwt_secret)?;
        tracing::info!(
            user_id = credential.user_id,
            user_type = %credential.user_type,
            "login succeeded"
        );

        Ok(LoginOutput {
            tokens,
            user_id: credential.user_id,
            user_type: credential.user_type,
            name: credential.name,
        })
    }

    async fn find_in_order(
        &self,
        field: LookupField,
        identifier: &str,
    ) -> Result<Option<Credential>, MarketplaceError> {
        if let Some(found) = self.producers.find_credential(field, identifier).await? {
            return Ok(Some(found));
        }
        if let Some(found) = self.collectors.find_credential(field, identifier).await? {
            return Ok(Some(found));
        }
        self.cooperatives.find_credential(field, identifier).await
    }
}
