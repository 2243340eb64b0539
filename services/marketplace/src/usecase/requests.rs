use chrono::{DateTime, Utc};
use tracing::info;

use coleta_domain::status::CollectionStatus;

use crate::domain::repository::{CollectionRequestRepository, ProducerRepository};
use crate::domain::types::{
    CollectionRequest, CollectionRequestDetail, NewCollectionRequest, NewRequestItem,
};
use crate::error::MarketplaceError;

// ── CreateRequest ────────────────────────────────────────────────────────────

pub struct CreateRequestInput {
    pub producer_id: i32,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub notes: Option<String>,
    pub items: Vec<NewRequestItem>,
}

/// Column widths of `request_items`, in characters.
pub const MAX_WASTE_TYPE_LEN: usize = 50;
pub const MAX_UNIT_LEN: usize = 20;

pub struct CreateRequestUseCase<R: CollectionRequestRepository> {
    pub requests: R,
}

impl<R: CollectionRequestRepository> CreateRequestUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateRequestInput,
    ) -> Result<CollectionRequest, MarketplaceError> {
        if input.items.is_empty() {
            return Err(MarketplaceError::Validation(
                "at least one item is required".to_owned(),
            ));
        }
        if input.window_end <= input.window_start {
            return Err(MarketplaceError::Validation(
                "window_end must be after window_start".to_owned(),
            ));
        }
        let items: Vec<NewRequestItem> = input
            .items
            .into_iter()
            .map(|item| NewRequestItem {
                waste_type: item.waste_type.trim().to_owned(),
                unit: item.unit.trim().to_owned(),
                ..item
            })
            .collect();
        for item in &items {
            if item.waste_type.is_empty() || item.unit.is_empty() {
                return Err(MarketplaceError::Validation(
                    "item waste_type and unit are required".to_owned(),
                ));
            }
            if item.waste_type.chars().count() > MAX_WASTE_TYPE_LEN {
                return Err(MarketplaceError::Validation(format!(
                    "item waste_type must be at most {MAX_WASTE_TYPE_LEN} characters"
                )));
            }
            if item.unit.chars().count() > MAX_UNIT_LEN {
                return Err(MarketplaceError::Validation(format!(
                    "item unit must be at most {MAX_UNIT_LEN} characters"
                )));
            }
            if !item.quantity.is_finite() || item.quantity <= 0.0 {
                return Err(MarketplaceError::Validation(
                    "item quantity must be positive".to_owned(),
                ));
            }
        }

        let created = self
            .requests
            .create(&NewCollectionRequest {
                producer_id: input.producer_id,
                window_start: input.window_start,
                window_end: input.window_end,
                notes: input.notes.filter(|n| !n.trim().is_empty()),
                items,
            })
            .await?;

        info!(
            request_id = created.id,
            producer_id = created.producer_id,
            items = created.items.len(),
            "collection request created"
        );
        Ok(created)
    }
}

// ── Listings ─────────────────────────────────────────────────────────────────

pub struct ListProducerRequestsUseCase<R: CollectionRequestRepository> {
    pub requests: R,
}

impl<R: CollectionRequestRepository> ListProducerRequestsUseCase<R> {
    pub async fn execute(
        &self,
        producer_id: i32,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError> {
        self.requests.list_by_producer(producer_id).await
    }
}

pub struct ListCollectorRequestsUseCase<R: CollectionRequestRepository> {
    pub requests: R,
}

impl<R: CollectionRequestRepository> ListCollectorRequestsUseCase<R> {
    pub async fn execute(
        &self,
        collector_id: i32,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError> {
        self.requests.list_by_collector(collector_id).await
    }
}

/// Requests still waiting for a collector. No geographic filtering.
pub struct ListAvailableRequestsUseCase<R: CollectionRequestRepository> {
    pub requests: R,
}

impl<R: CollectionRequestRepository> ListAvailableRequestsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<CollectionRequest>, MarketplaceError> {
        let requests = self
            .requests
            .list_by_status(CollectionStatus::Requested)
            .await?;
        Ok(requests
            .into_iter()
            .filter(|r| r.status.is_available())
            .collect())
    }
}

// ── Detail ───────────────────────────────────────────────────────────────────

pub struct GetRequestDetailUseCase<R: CollectionRequestRepository, P: ProducerRepository> {
    pub requests: R,
    pub producers: P,
}

impl<R: CollectionRequestRepository, P: ProducerRepository> GetRequestDetailUseCase<R, P> {
    pub async fn execute(&self, id: i32) -> Result<CollectionRequestDetail, MarketplaceError> {
        let request = self
            .requests
            .find_by_id(id)
            .await?
            .ok_or(MarketplaceError::RequestNotFound)?;
        let producer = self.producers.find_summary(request.producer_id).await?;
        Ok(CollectionRequestDetail { request, producer })
    }
}

// ── Accept ───────────────────────────────────────────────────────────────────

pub struct AcceptRequestUseCase<R: CollectionRequestRepository> {
    pub requests: R,
}

impl<R: CollectionRequestRepository> AcceptRequestUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        collector_id: i32,
    ) -> Result<CollectionRequest, MarketplaceError> {
        if !self.requests.try_accept(id, collector_id).await? {
            return match self.requests.find_by_id(id).await? {
                Some(_) => Err(MarketplaceError::RequestNotAvailable),
                None => Err(MarketplaceError::RequestNotFound),
            };
        }

        info!(request_id = id, collector_id, "collection request accepted");
        self.requests
            .find_by_id(id)
            .await?
            .ok_or(MarketplaceError::RequestNotFound)
    }
}

// ── UpdateStatus ─────────────────────────────────────────────────────────────

pub struct UpdateStatusUseCase<R: CollectionRequestRepository> {
    pub requests: R,
}

impl<R: CollectionRequestRepository> UpdateStatusUseCase<R> {
    /// `status` is the raw wire value; anything outside the allow-list is
    /// rejected before the store is read.
    pub async fn execute(
        &self,
        id: i32,
        status: &str,
    ) -> Result<CollectionRequest, MarketplaceError> {
        let next: CollectionStatus = status.parse()?;

        let current = self
            .requests
            .find_by_id(id)
            .await?
            .ok_or(MarketplaceError::RequestNotFound)?;

        if !current.status.can_transition_to(next) {
            return Err(MarketplaceError::InvalidTransition {
                from: current.status,
                to: next,
            });
        }

        if !self
            .requests
            .compare_and_set_status(id, current.status, next)
            .await?
        {
            return match self.requests.find_by_id(id).await? {
                Some(_) => Err(MarketplaceError::StatusConflict),
                None => Err(MarketplaceError::RequestNotFound),
            };
        }

        info!(request_id = id, from = %current.status, to = %next, "status updated");
        Ok(CollectionRequest {
            status: next,
            ..current
        })
    }
}
