#![allow(async_fn_in_trait)]

use coleta_domain::geo::{Address, GeoPoint};
use coleta_domain::status::CollectionStatus;

use crate::domain::types::{
    CollectionRequest, Cooperative, Credential, LookupField, NewAccount, NewCollectionRequest,
    ProducerSummary,
};
use crate::error::MarketplaceError;

/// One account table (producers, collectors or cooperatives).
///
/// Uniqueness of email and document is scoped to the implementing table.
pub trait AccountRepository: Send + Sync {
    /// Read model returned after registration. Never carries the password hash.
    type Account: Send;

    async fn email_taken(&self, email: &str) -> Result<bool, MarketplaceError>;

    async fn document_taken(&self, document: &str) -> Result<bool, MarketplaceError>;

    /// Insert a row. A unique-constraint violation surfaces as
    /// [`MarketplaceError::EmailAlreadyRegistered`] or
    /// [`MarketplaceError::DocumentAlreadyRegistered`].
    async fn create(&self, account: &NewAccount) -> Result<Self::Account, MarketplaceError>;

    async fn find_credential(
        &self,
        field: LookupField,
        identifier: &str,
    ) -> Result<Option<Credential>, MarketplaceError>;
}

pub trait ProducerRepository: Send + Sync {
    async fn find_summary(&self, id: i32) -> Result<Option<ProducerSummary>, MarketplaceError>;
}

pub trait CooperativeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Cooperative>, MarketplaceError>;
}

/// Collection requests and their items. Lists are ordered newest id first.
pub trait CollectionRequestRepository: Send + Sync {
    /// Insert the request and all of its items in one transaction.
    async fn create(
        &self,
        request: &NewCollectionRequest,
    ) -> Result<CollectionRequest, MarketplaceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<CollectionRequest>, MarketplaceError>;

    async fn list_by_producer(
        &self,
        producer_id: i32,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError>;

    async fn list_by_collector(
        &self,
        collector_id: i32,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError>;

    async fn list_by_status(
        &self,
        status: CollectionStatus,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError>;

    /// Assign `collector_id` and move to `accepted` only if the request is
    /// still `requested`. Returns `false` when no row matched.
    async fn try_accept(&self, id: i32, collector_id: i32) -> Result<bool, MarketplaceError>;

    /// Set `to` only if the stored status still equals `from`.
    /// Returns `false` when no row matched.
    async fn compare_and_set_status(
        &self,
        id: i32,
        from: CollectionStatus,
        to: CollectionStatus,
    ) -> Result<bool, MarketplaceError>;
}

/// Address to coordinate lookup. Failures are absorbed into `None`.
pub trait GeocoderPort: Send + Sync {
    async fn locate(&self, address: &Address) -> Option<GeoPoint>;
}
