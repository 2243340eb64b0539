use coleta_domain::status::CollectionStatus;
use coleta_marketplace::domain::types::ProducerSummary;
use coleta_marketplace::error::MarketplaceError;
use coleta_marketplace::usecase::requests::{
    AcceptRequestUseCase, CreateRequestInput, CreateRequestUseCase, GetRequestDetailUseCase,
    ListAvailableRequestsUseCase, ListCollectorRequestsUseCase, ListProducerRequestsUseCase,
    MAX_UNIT_LEN, MAX_WASTE_TYPE_LEN, UpdateStatusUseCase,
};

use crate::helpers::{
    MockProducerRepo, MockRequestRepo, test_item, test_request, window_end, window_start,
};

fn create_input(items: usize) -> CreateRequestInput {
    CreateRequestInput {
        producer_id: 1,
        window_start: window_start(),
        window_end: window_end(),
        notes: Some("portão azul".to_owned()),
        items: (0..items).map(|i| test_item(&format!("waste-{i}"))).collect(),
    }
}

// ── CreateRequestUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_request_with_all_items() {
    let repo = MockRequestRepo::default();
    let usecase = CreateRequestUseCase {
        requests: repo.clone(),
    };

    let created = usecase.execute(create_input(3)).await.unwrap();

    assert_eq!(created.status, CollectionStatus::Requested);
    assert_eq!(created.collector_id, None);
    assert_eq!(created.items.len(), 3);
    assert_eq!(repo.get(created.id).unwrap().items.len(), 3);
}

#[tokio::test]
async fn should_reject_request_without_items() {
    let usecase = CreateRequestUseCase {
        requests: MockRequestRepo::default(),
    };

    let err = usecase.execute(create_input(0)).await.unwrap_err();

    assert!(matches!(err, MarketplaceError::Validation(_)));
}

#[tokio::test]
async fn should_reject_inverted_window() {
    let usecase = CreateRequestUseCase {
        requests: MockRequestRepo::default(),
    };

    let err = usecase
        .execute(CreateRequestInput {
            window_start: window_end(),
            window_end: window_start(),
            ..create_input(1)
        })
        .await
        .unwrap_err();

    assert!(matches!(err, MarketplaceError::Validation(_)));
}

#[tokio::test]
async fn should_reject_non_positive_quantity() {
    let usecase = CreateRequestUseCase {
        requests: MockRequestRepo::default(),
    };
    let mut input = create_input(1);
    input.items[0].quantity = 0.0;

    let err = usecase.execute(input).await.unwrap_err();

    assert!(matches!(err, MarketplaceError::Validation(_)));
}

#[tokio::test]
async fn should_reject_item_text_wider_than_its_column() {
    let usecase = CreateRequestUseCase {
        requests: MockRequestRepo::default(),
    };

    let mut input = create_input(1);
    input.items[0].waste_type = "p".repeat(MAX_WASTE_TYPE_LEN + 1);
    let err = usecase.execute(input).await.unwrap_err();
    assert!(matches!(err, MarketplaceError::Validation(m) if m.contains("waste_type")));

    let mut input = create_input(1);
    input.items[0].unit = "k".repeat(MAX_UNIT_LEN + 1);
    let err = usecase.execute(input).await.unwrap_err();
    assert!(matches!(err, MarketplaceError::Validation(m) if m.contains("unit")));
}

#[tokio::test]
async fn should_store_trimmed_item_text() {
    let repo = MockRequestRepo::default();
    let usecase = CreateRequestUseCase {
        requests: repo.clone(),
    };
    let mut input = create_input(1);
    input.items[0].waste_type = "  plástico ".into();
    input.items[0].unit = " kg ".into();

    let created = usecase.execute(input).await.unwrap();

    assert_eq!(created.items[0].waste_type, "plástico");
    assert_eq!(created.items[0].unit, "kg");
}

// ── Listings ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_only_requested_newest_first() {
    let repo = MockRequestRepo::new(vec![
        test_request(1, 1, CollectionStatus::Requested),
        test_request(2, 1, CollectionStatus::Accepted),
        test_request(3, 2, CollectionStatus::Requested),
        test_request(4, 2, CollectionStatus::AwaitingCollector),
        test_request(5, 2, CollectionStatus::Cancelled),
    ]);

    let available = ListAvailableRequestsUseCase { requests: repo }
        .execute()
        .await
        .unwrap();

    let ids: Vec<i32> = available.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[tokio::test]
async fn should_list_producer_requests_only() {
    let repo = MockRequestRepo::new(vec![
        test_request(1, 1, CollectionStatus::Requested),
        test_request(2, 2, CollectionStatus::Requested),
        test_request(3, 1, CollectionStatus::Collected),
    ]);

    let mine = ListProducerRequestsUseCase { requests: repo }
        .execute(1)
        .await
        .unwrap();

    let ids: Vec<i32> = mine.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[tokio::test]
async fn should_list_requests_assigned_to_collector() {
    let repo = MockRequestRepo::new(vec![
        test_request(1, 1, CollectionStatus::Requested),
        test_request(2, 1, CollectionStatus::Requested),
    ]);
    AcceptRequestUseCase {
        requests: repo.clone(),
    }
    .execute(2, 7)
    .await
    .unwrap();

    let assigned = ListCollectorRequestsUseCase { requests: repo }
        .execute(7)
        .await
        .unwrap();

    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, 2);
    assert_eq!(assigned[0].items.len(), 1);
}

// ── Detail ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_include_producer_summary_in_detail() {
    let usecase = GetRequestDetailUseCase {
        requests: MockRequestRepo::new(vec![test_request(1, 3, CollectionStatus::Requested)]),
        producers: MockProducerRepo {
            producers: vec![ProducerSummary {
                id: 3,
                name: "Maria".to_owned(),
                phone: None,
                city: Some("Recife".to_owned()),
                state: Some("PE".to_owned()),
            }],
        },
    };

    let detail = usecase.execute(1).await.unwrap();

    assert_eq!(detail.request.id, 1);
    assert_eq!(detail.producer.unwrap().name, "Maria");
}

#[tokio::test]
async fn should_return_not_found_for_missing_detail() {
    let usecase = GetRequestDetailUseCase {
        requests: MockRequestRepo::default(),
        producers: MockProducerRepo { producers: vec![] },
    };

    let err = usecase.execute(42).await.unwrap_err();

    assert!(matches!(err, MarketplaceError::RequestNotFound));
}

// ── AcceptRequestUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_accept_requested_request() {
    let repo = MockRequestRepo::new(vec![test_request(1, 1, CollectionStatus::Requested)]);
    let usecase = AcceptRequestUseCase { requests: repo };

    let accepted = usecase.execute(1, 7).await.unwrap();

    assert_eq!(accepted.status, CollectionStatus::Accepted);
    assert_eq!(accepted.collector_id, Some(7));
}

#[tokio::test]
async fn should_reject_second_accept_as_not_available() {
    let repo = MockRequestRepo::new(vec![test_request(1, 1, CollectionStatus::Requested)]);
    let usecase = AcceptRequestUseCase {
        requests: repo.clone(),
    };

    usecase.execute(1, 7).await.unwrap();
    let err = usecase.execute(1, 8).await.unwrap_err();

    assert!(matches!(err, MarketplaceError::RequestNotAvailable));
    assert_eq!(repo.get(1).unwrap().collector_id, Some(7));
}

#[tokio::test]
async fn should_return_not_found_when_accepting_missing_request() {
    let usecase = AcceptRequestUseCase {
        requests: MockRequestRepo::default(),
    };

    let err = usecase.execute(99, 7).await.unwrap_err();

    assert!(matches!(err, MarketplaceError::RequestNotFound));
}

// ── UpdateStatusUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_follow_allowed_transition() {
    let repo = MockRequestRepo::new(vec![test_request(1, 1, CollectionStatus::Accepted)]);
    let usecase = UpdateStatusUseCase {
        requests: repo.clone(),
    };

    let updated = usecase.execute(1, "en_route").await.unwrap();

    assert_eq!(updated.status, CollectionStatus::EnRoute);
    assert_eq!(repo.get(1).unwrap().status, CollectionStatus::EnRoute);
}

#[tokio::test]
async fn should_reject_unknown_status_literal() {
    let usecase = UpdateStatusUseCase {
        requests: MockRequestRepo::new(vec![test_request(1, 1, CollectionStatus::Requested)]),
    };

    let err = usecase.execute(1, "EM ROTA").await.unwrap_err();

    assert!(matches!(err, MarketplaceError::UnknownStatus(s) if s == "EM ROTA"));
}

#[tokio::test]
async fn should_reject_accepted_as_status_target() {
    let usecase = UpdateStatusUseCase {
        requests: MockRequestRepo::new(vec![test_request(1, 1, CollectionStatus::Requested)]),
    };

    let err = usecase.execute(1, "accepted").await.unwrap_err();

    assert!(matches!(
        err,
        MarketplaceError::InvalidTransition {
            from: CollectionStatus::Requested,
            to: CollectionStatus::Accepted,
        }
    ));
}

#[tokio::test]
async fn should_reject_leaving_terminal_state() {
    let repo = MockRequestRepo::new(vec![test_request(1, 1, CollectionStatus::Collected)]);
    let usecase = UpdateStatusUseCase {
        requests: repo.clone(),
    };

    let err = usecase.execute(1, "requested").await.unwrap_err();

    assert!(matches!(err, MarketplaceError::InvalidTransition { .. }));
    assert_eq!(repo.get(1).unwrap().status, CollectionStatus::Collected);
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_request() {
    let usecase = UpdateStatusUseCase {
        requests: MockRequestRepo::default(),
    };

    let err = usecase.execute(5, "cancelled").await.unwrap_err();

    assert!(matches!(err, MarketplaceError::RequestNotFound));
}

#[tokio::test]
async fn should_return_conflict_when_status_changed_after_read() {
    let repo = MockRequestRepo::new(vec![test_request(1, 1, CollectionStatus::Accepted)])
        .with_concurrent_write(|requests| requests[0].status = CollectionStatus::Cancelled);
    let usecase = UpdateStatusUseCase {
        requests: repo.clone(),
    };

    let err = usecase.execute(1, "en_route").await.unwrap_err();

    assert!(matches!(err, MarketplaceError::StatusConflict));
    assert_eq!(repo.get(1).unwrap().status, CollectionStatus::Cancelled);
}

#[tokio::test]
async fn should_return_not_found_when_request_deleted_after_read() {
    let repo = MockRequestRepo::new(vec![test_request(1, 1, CollectionStatus::Accepted)])
        .with_concurrent_write(|requests| requests.clear());
    let usecase = UpdateStatusUseCase { requests: repo };

    let err = usecase.execute(1, "en_route").await.unwrap_err();

    assert!(matches!(err, MarketplaceError::RequestNotFound));
}
