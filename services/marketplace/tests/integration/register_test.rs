use coleta_domain::geo::GeoPoint;
use coleta_domain::user_type::UserType;
use coleta_marketplace::domain::types::AccountDraft;
use coleta_marketplace::error::MarketplaceError;
use coleta_marketplace::usecase::login::verify_password;
use coleta_marketplace::usecase::register::RegisterUseCase;

use crate::helpers::{MockAccountRepo, MockGeocoder, test_draft};

const RECIFE: GeoPoint = GeoPoint {
    latitude: -8.0631,
    longitude: -34.8711,
};

#[tokio::test]
async fn should_register_and_store_geocoded_point() {
    let usecase = RegisterUseCase {
        accounts: MockAccountRepo::empty(UserType::Producer),
        geocoder: MockGeocoder::returning(Some(RECIFE)),
    };

    let account = usecase
        .execute(test_draft("maria@example.com", "11122233344"))
        .await
        .unwrap();

    assert_eq!(account.email, "maria@example.com");
    assert_eq!(account.location, Some(RECIFE));
    assert_eq!(usecase.geocoder.calls(), 1);
}

#[tokio::test]
async fn should_register_without_point_when_geocoding_fails() {
    let usecase = RegisterUseCase {
        accounts: MockAccountRepo::empty(UserType::Collector),
        geocoder: MockGeocoder::returning(None),
    };

    let account = usecase
        .execute(test_draft("joao@example.com", "55566677788"))
        .await
        .unwrap();

    assert_eq!(account.location, None);
}

#[tokio::test]
async fn should_store_argon2_hash_not_plaintext() {
    let usecase = RegisterUseCase {
        accounts: MockAccountRepo::empty(UserType::Producer),
        geocoder: MockGeocoder::returning(None),
    };

    let draft = test_draft("maria@example.com", "11122233344");
    let password = draft.password.clone();
    let account = usecase.execute(draft).await.unwrap();

    assert_ne!(account.password_hash, password);
    assert!(verify_password(&password, &account.password_hash));
}

#[tokio::test]
async fn should_reject_duplicate_email_in_same_table() {
    let usecase = RegisterUseCase {
        accounts: MockAccountRepo::empty(UserType::Producer).with_account(
            1,
            "maria@example.com",
            "00000000000",
            "whatever",
        ),
        geocoder: MockGeocoder::returning(None),
    };

    let err = usecase
        .execute(test_draft("maria@example.com", "11122233344"))
        .await
        .unwrap_err();

    assert!(matches!(err, MarketplaceError::EmailAlreadyRegistered));
    assert_eq!(usecase.accounts.len(), 1);
    assert_eq!(usecase.geocoder.calls(), 0);
}

#[tokio::test]
async fn should_reject_duplicate_document_in_same_table() {
    let usecase = RegisterUseCase {
        accounts: MockAccountRepo::empty(UserType::Cooperative).with_account(
            1,
            "other@example.com",
            "11122233344",
            "whatever",
        ),
        geocoder: MockGeocoder::returning(None),
    };

    let err = usecase
        .execute(test_draft("maria@example.com", "11122233344"))
        .await
        .unwrap_err();

    assert!(matches!(err, MarketplaceError::DocumentAlreadyRegistered));
}

#[tokio::test]
async fn should_allow_same_email_in_another_table() {
    let producers = MockAccountRepo::empty(UserType::Producer);
    let collectors = MockAccountRepo::empty(UserType::Collector);

    RegisterUseCase {
        accounts: producers.clone(),
        geocoder: MockGeocoder::returning(None),
    }
    .execute(test_draft("shared@example.com", "11122233344"))
    .await
    .unwrap();

    RegisterUseCase {
        accounts: collectors.clone(),
        geocoder: MockGeocoder::returning(None),
    }
    .execute(test_draft("shared@example.com", "11122233344"))
    .await
    .unwrap();

    assert_eq!(producers.len(), 1);
    assert_eq!(collectors.len(), 1);
}

#[tokio::test]
async fn should_fail_validation_before_any_lookup() {
    let usecase = RegisterUseCase {
        accounts: MockAccountRepo::empty(UserType::Producer),
        geocoder: MockGeocoder::returning(Some(RECIFE)),
    };

    let err = usecase
        .execute(AccountDraft {
            password: "123".to_owned(),
            ..test_draft("maria@example.com", "11122233344")
        })
        .await
        .unwrap_err();

    assert!(matches!(err, MarketplaceError::Validation(_)));
    assert_eq!(usecase.accounts.len(), 0);
    assert_eq!(usecase.geocoder.calls(), 0);
}
