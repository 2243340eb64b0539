use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use coleta_domain::geo::{Address, GeoPoint};
use coleta_domain::status::CollectionStatus;
use coleta_domain::user_type::UserType;
use coleta_marketplace::domain::repository::{
    AccountRepository, CollectionRequestRepository, GeocoderPort, ProducerRepository,
};
use coleta_marketplace::domain::types::{
    AccountDraft, CollectionRequest, Credential, LookupField, NewAccount, NewCollectionRequest,
    NewRequestItem, ProducerSummary, RequestItem,
};
use coleta_marketplace::error::MarketplaceError;
use coleta_marketplace::infra::geocoder::HttpGeocoder;
use coleta_marketplace::state::AppState;
use coleta_marketplace::usecase::login::hash_password;
use coleta_marketplace_migration::Migrator;

pub const TEST_JWT_SECRET: &str = "marketplace-test-secret";

// ── MockAccountRepo ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MockAccount {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub document: String,
    pub password_hash: String,
    pub location: Option<GeoPoint>,
}

/// In-memory account table. Uniqueness is enforced per instance, like a
/// single database table.
#[derive(Clone)]
pub struct MockAccountRepo {
    pub user_type: UserType,
    pub rows: Arc<Mutex<Vec<MockAccount>>>,
}

impl MockAccountRepo {
    pub fn empty(user_type: UserType) -> Self {
        Self {
            user_type,
            rows: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Seed a row whose password is `password`.
    pub fn with_account(self, id: i32, email: &str, document: &str, password: &str) -> Self {
        self.rows.lock().unwrap().push(MockAccount {
            id,
            name: format!("{} {id}", self.user_type),
            email: email.to_owned(),
            document: document.to_owned(),
            password_hash: hash_password(password).unwrap(),
            location: None,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl AccountRepository for MockAccountRepo {
    type Account = MockAccount;

    async fn email_taken(&self, email: &str) -> Result<bool, MarketplaceError> {
        Ok(self.rows.lock().unwrap().iter().any(|r| r.email == email))
    }

    async fn document_taken(&self, document: &str) -> Result<bool, MarketplaceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.document == document))
    }

    async fn create(&self, account: &NewAccount) -> Result<MockAccount, MarketplaceError> {
        let mut rows = self.rows.lock().unwrap();
        let row = MockAccount {
            id: rows.len() as i32 + 1,
            name: account.name.clone(),
            email: account.email.clone(),
            document: account.document.clone(),
            password_hash: account.password_hash.clone(),
            location: account.location,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_credential(
        &self,
        field: LookupField,
        identifier: &str,
    ) -> Result<Option<Credential>, MarketplaceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| match field {
                LookupField::Email => r.email == identifier,
                LookupField::Document => r.document == identifier,
            })
            .map(|r| Credential {
                user_id: r.id,
                user_type: self.user_type,
                name: r.name.clone(),
                password_hash: r.password_hash.clone(),
            }))
    }
}

// ── MockGeocoder ─────────────────────────────────────────────────────────────

pub struct MockGeocoder {
    pub point: Option<GeoPoint>,
    pub calls: Arc<AtomicUsize>,
}

impl MockGeocoder {
    pub fn returning(point: Option<GeoPoint>) -> Self {
        Self {
            point,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GeocoderPort for MockGeocoder {
    async fn locate(&self, _address: &Address) -> Option<GeoPoint> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.point
    }
}

// ── MockRequestRepo ──────────────────────────────────────────────────────────

type ConcurrentWrite = Box<dyn FnOnce(&mut Vec<CollectionRequest>) + Send>;

#[derive(Clone, Default)]
pub struct MockRequestRepo {
    pub requests: Arc<Mutex<Vec<CollectionRequest>>>,
    /// Applied once, just before the next status write, as if another
    /// caller got there between the read and the write.
    concurrent_write: Arc<Mutex<Option<ConcurrentWrite>>>,
}

impl MockRequestRepo {
    pub fn new(requests: Vec<CollectionRequest>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(requests)),
            concurrent_write: Arc::default(),
        }
    }

    pub fn with_concurrent_write(
        self,
        write: impl FnOnce(&mut Vec<CollectionRequest>) + Send + 'static,
    ) -> Self {
        *self.concurrent_write.lock().unwrap() = Some(Box::new(write));
        self
    }

    pub fn get(&self, id: i32) -> Option<CollectionRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    fn newest_first(&self, keep: impl Fn(&CollectionRequest) -> bool) -> Vec<CollectionRequest> {
        let mut out: Vec<_> = self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| keep(r))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.id.cmp(&a.id));
        out
    }
}

impl CollectionRequestRepository for MockRequestRepo {
    async fn create(
        &self,
        request: &NewCollectionRequest,
    ) -> Result<CollectionRequest, MarketplaceError> {
        let mut requests = self.requests.lock().unwrap();
        let id = requests.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created = CollectionRequest {
            id,
            producer_id: request.producer_id,
            collector_id: None,
            created_at: Utc::now(),
            window_start: request.window_start,
            window_end: request.window_end,
            status: CollectionStatus::Requested,
            notes: request.notes.clone(),
            items: request
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| RequestItem {
                    id: i as i32 + 1,
                    waste_type: item.waste_type.clone(),
                    quantity: item.quantity,
                    unit: item.unit.clone(),
                })
                .collect(),
        };
        requests.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CollectionRequest>, MarketplaceError> {
        Ok(self.get(id))
    }

    async fn list_by_producer(
        &self,
        producer_id: i32,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError> {
        Ok(self.newest_first(|r| r.producer_id == producer_id))
    }

    async fn list_by_collector(
        &self,
        collector_id: i32,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError> {
        Ok(self.newest_first(|r| r.collector_id == Some(collector_id)))
    }

    async fn list_by_status(
        &self,
        status: CollectionStatus,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError> {
        Ok(self.newest_first(|r| r.status == status))
    }

    async fn try_accept(&self, id: i32, collector_id: i32) -> Result<bool, MarketplaceError> {
        let mut requests = self.requests.lock().unwrap();
        match requests
            .iter_mut()
            .find(|r| r.id == id && r.status == CollectionStatus::Requested)
        {
            Some(r) => {
                r.collector_id = Some(collector_id);
                r.status = CollectionStatus::Accepted;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn compare_and_set_status(
        &self,
        id: i32,
        from: CollectionStatus,
        to: CollectionStatus,
    ) -> Result<bool, MarketplaceError> {
        let mut requests = self.requests.lock().unwrap();
        if let Some(write) = self.concurrent_write.lock().unwrap().take() {
            write(&mut *requests);
        }
        match requests.iter_mut().find(|r| r.id == id && r.status == from) {
            Some(r) => {
                r.status = to;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── MockProducerRepo ─────────────────────────────────────────────────────────

pub struct MockProducerRepo {
    pub producers: Vec<ProducerSummary>,
}

impl ProducerRepository for MockProducerRepo {
    async fn find_summary(&self, id: i32) -> Result<Option<ProducerSummary>, MarketplaceError> {
        Ok(self.producers.iter().find(|p| p.id == id).cloned())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn window_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 3, 9, 0, 0).unwrap()
}

pub fn window_end() -> DateTime<Utc> {
    window_start() + Duration::hours(3)
}

pub fn test_draft(email: &str, document: &str) -> AccountDraft {
    AccountDraft {
        name: "Maria Silva".to_owned(),
        email: email.to_owned(),
        password: "s3nha-forte".to_owned(),
        phone: Some("81999990000".to_owned()),
        document: document.to_owned(),
        address: Address {
            postal_code: Some("50030-230".to_owned()),
            street: Some("Rua da Aurora".to_owned()),
            number: Some("100".to_owned()),
            neighborhood: Some("Boa Vista".to_owned()),
            city: Some("Recife".to_owned()),
            state: Some("PE".to_owned()),
        },
    }
}

pub fn test_item(waste_type: &str) -> NewRequestItem {
    NewRequestItem {
        waste_type: waste_type.to_owned(),
        quantity: 12.5,
        unit: "kg".to_owned(),
    }
}

pub fn test_request(id: i32, producer_id: i32, status: CollectionStatus) -> CollectionRequest {
    CollectionRequest {
        id,
        producer_id,
        collector_id: None,
        created_at: Utc::now(),
        window_start: window_start(),
        window_end: window_end(),
        status,
        notes: None,
        items: vec![RequestItem {
            id,
            waste_type: "plastic".to_owned(),
            quantity: 3.0,
            unit: "kg".to_owned(),
        }],
    }
}

// ── SQLite-backed state ──────────────────────────────────────────────────────

/// Fresh in-memory database with all migrations applied.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn test_state(db: DatabaseConnection) -> AppState {
    AppState {
        db,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        geocoder: HttpGeocoder::disabled(),
    }
}
