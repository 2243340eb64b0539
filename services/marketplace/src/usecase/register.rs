use coleta_domain::geo::Address;

use crate::domain::repository::{AccountRepository, GeocoderPort};
use crate::domain::types::{AccountDraft, NewAccount};
use crate::error::MarketplaceError;
use crate::usecase::login::hash_password;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Column widths of the account tables, in characters.
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_PHONE_LEN: usize = 20;
pub const MAX_DOCUMENT_LEN: usize = 18;
pub const MAX_POSTAL_CODE_LEN: usize = 9;
pub const MAX_STREET_LEN: usize = 100;
pub const MAX_NUMBER_LEN: usize = 10;
pub const MAX_NEIGHBORHOOD_LEN: usize = 50;
pub const MAX_CITY_LEN: usize = 50;

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Trim every text field. Blank optional fields become `None`.
///
/// The password is left as typed.
pub fn normalize_draft(draft: AccountDraft) -> AccountDraft {
    let address = draft.address;
    AccountDraft {
        name: draft.name.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        password: draft.password,
        phone: trim_optional(draft.phone),
        document: draft.document.trim().to_owned(),
        address: Address {
            postal_code: trim_optional(address.postal_code),
            street: trim_optional(address.street),
            number: trim_optional(address.number),
            neighborhood: trim_optional(address.neighborhood),
            city: trim_optional(address.city),
            state: trim_optional(address.state),
        },
    }
}

fn check_len(field: &str, value: Option<&str>, max: usize) -> Result<(), MarketplaceError> {
    match value {
        Some(v) if v.chars().count() > max => Err(MarketplaceError::Validation(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

/// Check required fields, formats and column widths of a normalized draft.
pub fn validate_draft(draft: &AccountDraft) -> Result<(), MarketplaceError> {
    let required = [
        ("name", &draft.name),
        ("email", &draft.email),
        ("password", &draft.password),
        ("document", &draft.document),
    ];
    if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
        return Err(MarketplaceError::Validation(format!("{field} is required")));
    }

    if !draft.email.contains('@') {
        return Err(MarketplaceError::Validation(
            "email is not a valid address".to_owned(),
        ));
    }

    if draft.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(MarketplaceError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let address = &draft.address;
    check_len("name", Some(&draft.name), MAX_NAME_LEN)?;
    check_len("email", Some(&draft.email), MAX_EMAIL_LEN)?;
    check_len("phone", draft.phone.as_deref(), MAX_PHONE_LEN)?;
    check_len("document", Some(&draft.document), MAX_DOCUMENT_LEN)?;
    check_len("postal_code", address.postal_code.as_deref(), MAX_POSTAL_CODE_LEN)?;
    check_len("street", address.street.as_deref(), MAX_STREET_LEN)?;
    check_len("number", address.number.as_deref(), MAX_NUMBER_LEN)?;
    check_len("neighborhood", address.neighborhood.as_deref(), MAX_NEIGHBORHOOD_LEN)?;
    check_len("city", address.city.as_deref(), MAX_CITY_LEN)?;

    if let Some(state) = address.state.as_deref() {
        if !(state.len() == 2 && state.chars().all(|c| c.is_ascii_alphabetic())) {
            return Err(MarketplaceError::Validation(
                "state must be a 2-letter code".to_owned(),
            ));
        }
    }

    Ok(())
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterUseCase<R: AccountRepository, G: GeocoderPort> {
    pub accounts: R,
    pub geocoder: G,
}

impl<R: AccountRepository, G: GeocoderPort> RegisterUseCase<R, G> {
    pub async fn execute(&self, draft: AccountDraft) -> Result<R::Account, MarketplaceError> {
        let draft = normalize_draft(draft);
        validate_draft(&draft)?;

        if self.accounts.email_taken(&draft.email).await? {
            return Err(MarketplaceError::EmailAlreadyRegistered);
        }
        if self.accounts.document_taken(&draft.document).await? {
            return Err(MarketplaceError::DocumentAlreadyRegistered);
        }

        let password_hash = hash_password(&draft.password)?;
        let location = self.geocoder.locate(&draft.address).await;

        self.accounts
            .create(&NewAccount {
                name: draft.name,
                email: draft.email,
                password_hash,
                phone: draft.phone,
                document: draft.document,
                address: draft.address,
                location,
            })
            .await
    }
}
