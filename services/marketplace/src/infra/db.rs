use std::collections::HashMap;

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};

use coleta_domain::geo::{Address, GeoPoint};
use coleta_domain::status::CollectionStatus;
use coleta_domain::user_type::UserType;
use coleta_marketplace_schema::{
    collection_requests, collectors, cooperatives, producers, request_items,
};

use crate::domain::repository::{
    AccountRepository, CollectionRequestRepository, CooperativeRepository, ProducerRepository,
};
use crate::domain::types::{
    CollectionRequest, Collector, Cooperative, Credential, LookupField, NewAccount,
    NewCollectionRequest, Producer, ProducerSummary, RequestItem,
};
use crate::error::MarketplaceError;

/// Turn an insert failure into the matching registration error when the
/// database reports a unique-constraint violation.
fn insert_error(err: DbErr, context: &'static str) -> MarketplaceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("document") => {
            MarketplaceError::DocumentAlreadyRegistered
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => MarketplaceError::EmailAlreadyRegistered,
        _ => MarketplaceError::Internal(anyhow::Error::new(err).context(context)),
    }
}

fn location(latitude: Option<f64>, longitude: Option<f64>) -> Option<GeoPoint> {
    Some(GeoPoint {
        latitude: latitude?,
        longitude: longitude?,
    })
}

// ── Producer repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProducerRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbProducerRepository {
    type Account = Producer;

    async fn email_taken(&self, email: &str) -> Result<bool, MarketplaceError> {
        let count = producers::Entity::find()
            .filter(producers::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("count producers by email")?;
        Ok(count > 0)
    }

    async fn document_taken(&self, document: &str) -> Result<bool, MarketplaceError> {
        let count = producers::Entity::find()
            .filter(producers::Column::Document.eq(document))
            .count(&self.db)
            .await
            .context("count producers by document")?;
        Ok(count > 0)
    }

    async fn create(&self, account: &NewAccount) -> Result<Producer, MarketplaceError> {
        let point = account.location;
        let model = producers::ActiveModel {
            name: Set(account.name.clone()),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            phone: Set(account.phone.clone()),
            document: Set(account.document.clone()),
            postal_code: Set(account.address.postal_code.clone()),
            street: Set(account.address.street.clone()),
            number: Set(account.address.number.clone()),
            neighborhood: Set(account.address.neighborhood.clone()),
            city: Set(account.address.city.clone()),
            state: Set(account.address.state.clone()),
            latitude: Set(point.map(|p| p.latitude)),
            longitude: Set(point.map(|p| p.longitude)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| insert_error(e, "insert producer"))?;
        Ok(producer_from_model(model))
    }

    async fn find_credential(
        &self,
        field: LookupField,
        identifier: &str,
    ) -> Result<Option<Credential>, MarketplaceError> {
        let column = match field {
            LookupField::Email => producers::Column::Email,
            LookupField::Document => producers::Column::Document,
        };
        let model = producers::Entity::find()
            .filter(column.eq(identifier))
            .one(&self.db)
            .await
            .context("find producer credential")?;
        Ok(model.map(|m| Credential {
            user_id: m.id,
            user_type: UserType::Producer,
            name: m.name,
            password_hash: m.password_hash,
        }))
    }
}

impl ProducerRepository for DbProducerRepository {
    async fn find_summary(&self, id: i32) -> Result<Option<ProducerSummary>, MarketplaceError> {
        let model = producers::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find producer by id")?;
        Ok(model.map(|m| ProducerSummary {
            id: m.id,
            name: m.name,
            phone: m.phone,
            city: m.city,
            state: m.state,
        }))
    }
}

fn producer_from_model(m: producers::Model) -> Producer {
    Producer {
        id: m.id,
        name: m.name,
        email: m.email,
        phone: m.phone,
        document: m.document,
        address: Address {
            postal_code: m.postal_code,
            street: m.street,
            number: m.number,
            neighborhood: m.neighborhood,
            city: m.city,
            state: m.state,
        },
        location: location(m.latitude, m.longitude),
    }
}

// ── Collector repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCollectorRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbCollectorRepository {
    type Account = Collector;

    async fn email_taken(&self, email: &str) -> Result<bool, MarketplaceError> {
        let count = collectors::Entity::find()
            .filter(collectors::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("count collectors by email")?;
        Ok(count > 0)
    }

    async fn document_taken(&self, document: &str) -> Result<bool, MarketplaceError> {
        let count = collectors::Entity::find()
            .filter(collectors::Column::Document.eq(document))
            .count(&self.db)
            .await
            .context("count collectors by document")?;
        Ok(count > 0)
    }

    async fn create(&self, account: &NewAccount) -> Result<Collector, MarketplaceError> {
        let point = account.location;
        let model = collectors::ActiveModel {
            name: Set(account.name.clone()),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            phone: Set(account.phone.clone()),
            document: Set(account.document.clone()),
            postal_code: Set(account.address.postal_code.clone()),
            city: Set(account.address.city.clone()),
            state: Set(account.address.state.clone()),
            latitude: Set(point.map(|p| p.latitude)),
            longitude: Set(point.map(|p| p.longitude)),
            rating: Set(0.0),
            rating_count: Set(0),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| insert_error(e, "insert collector"))?;

        Ok(Collector {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            document: model.document,
            postal_code: model.postal_code,
            city: model.city,
            state: model.state,
            location: location(model.latitude, model.longitude),
            rating: model.rating,
            rating_count: model.rating_count,
        })
    }

    async fn find_credential(
        &self,
        field: LookupField,
        identifier: &str,
    ) -> Result<Option<Credential>, MarketplaceError> {
        let column = match field {
            LookupField::Email => collectors::Column::Email,
            LookupField::Document => collectors::Column::Document,
        };
        let model = collectors::Entity::find()
            .filter(column.eq(identifier))
            .one(&self.db)
            .await
            .context("find collector credential")?;
        Ok(model.map(|m| Credential {
            user_id: m.id,
            user_type: UserType::Collector,
            name: m.name,
            password_hash: m.password_hash,
        }))
    }
}

// ── Cooperative repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCooperativeRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbCooperativeRepository {
    type Account = Cooperative;

    async fn email_taken(&self, email: &str) -> Result<bool, MarketplaceError> {
        let count = cooperatives::Entity::find()
            .filter(cooperatives::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("count cooperatives by email")?;
        Ok(count > 0)
    }

    async fn document_taken(&self, document: &str) -> Result<bool, MarketplaceError> {
        let count = cooperatives::Entity::find()
            .filter(cooperatives::Column::Document.eq(document))
            .count(&self.db)
            .await
            .context("count cooperatives by document")?;
        Ok(count > 0)
    }

    async fn create(&self, account: &NewAccount) -> Result<Cooperative, MarketplaceError> {
        let point = account.location;
        let model = cooperatives::ActiveModel {
            company_name: Set(account.name.clone()),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            phone: Set(account.phone.clone()),
            document: Set(account.document.clone()),
            postal_code: Set(account.address.postal_code.clone()),
            street: Set(account.address.street.clone()),
            number: Set(account.address.number.clone()),
            neighborhood: Set(account.address.neighborhood.clone()),
            city: Set(account.address.city.clone()),
            state: Set(account.address.state.clone()),
            latitude: Set(point.map(|p| p.latitude)),
            longitude: Set(point.map(|p| p.longitude)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| insert_error(e, "insert cooperative"))?;
        Ok(cooperative_from_model(model))
    }

    async fn find_credential(
        &self,
        field: LookupField,
        identifier: &str,
    ) -> Result<Option<Credential>, MarketplaceError> {
        let column = match field {
            LookupField::Email => cooperatives::Column::Email,
            LookupField::Document => cooperatives::Column::Document,
        };
        let model = cooperatives::Entity::find()
            .filter(column.eq(identifier))
            .one(&self.db)
            .await
            .context("find cooperative credential")?;
        Ok(model.map(|m| Credential {
            user_id: m.id,
            user_type: UserType::Cooperative,
            name: m.company_name,
            password_hash: m.password_hash,
        }))
    }
}

impl CooperativeRepository for DbCooperativeRepository {
    async fn list(&self) -> Result<Vec<Cooperative>, MarketplaceError> {
        let models = cooperatives::Entity::find()
            .order_by_asc(cooperatives::Column::Id)
            .all(&self.db)
            .await
            .context("list cooperatives")?;
        Ok(models.into_iter().map(cooperative_from_model).collect())
    }
}

fn cooperative_from_model(m: cooperatives::Model) -> Cooperative {
    Cooperative {
        id: m.id,
        company_name: m.company_name,
        email: m.email,
        phone: m.phone,
        document: m.document,
        address: Address {
            postal_code: m.postal_code,
            street: m.street,
            number: m.number,
            neighborhood: m.neighborhood,
            city: m.city,
            state: m.state,
        },
        location: location(m.latitude, m.longitude),
    }
}

// ── CollectionRequest repository ─────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCollectionRequestRepository {
    pub db: DatabaseConnection,
}

impl DbCollectionRequestRepository {
    /// Attach items to already-fetched requests, preserving request order.
    async fn with_items(
        &self,
        models: Vec<collection_requests::Model>,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError> {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let items = request_items::Entity::find()
            .filter(request_items::Column::RequestId.is_in(ids))
            .order_by_asc(request_items::Column::Id)
            .all(&self.db)
            .await
            .context("load request items")?;

        let mut by_request: HashMap<i32, Vec<RequestItem>> = HashMap::new();
        for item in items {
            by_request
                .entry(item.request_id)
                .or_default()
                .push(item_from_model(item));
        }

        models
            .into_iter()
            .map(|m| {
                let items = by_request.remove(&m.id).unwrap_or_default();
                request_from_model(m, items)
            })
            .collect()
    }

    async fn list_where(
        &self,
        filter: sea_orm::Condition,
        context: &'static str,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError> {
        let models = collection_requests::Entity::find()
            .filter(filter)
            .order_by_desc(collection_requests::Column::Id)
            .all(&self.db)
            .await
            .context(context)?;
        self.with_items(models).await
    }
}

impl CollectionRequestRepository for DbCollectionRequestRepository {
    async fn create(
        &self,
        request: &NewCollectionRequest,
    ) -> Result<CollectionRequest, MarketplaceError> {
        let (model, items) = self
            .db
            .transaction::<_, _, DbErr>(|txn| {
                let request = request.clone();
                Box::pin(async move { insert_request(txn, &request).await })
            })
            .await
            .context("create collection request with items")?;

        request_from_model(model, items.into_iter().map(item_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CollectionRequest>, MarketplaceError> {
        let Some(model) = collection_requests::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find collection request by id")?
        else {
            return Ok(None);
        };
        Ok(self.with_items(vec![model]).await?.pop())
    }

    async fn list_by_producer(
        &self,
        producer_id: i32,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError> {
        self.list_where(
            sea_orm::Condition::all()
                .add(collection_requests::Column::ProducerId.eq(producer_id)),
            "list collection requests by producer",
        )
        .await
    }

    async fn list_by_collector(
        &self,
        collector_id: i32,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError> {
        self.list_where(
            sea_orm::Condition::all()
                .add(collection_requests::Column::CollectorId.eq(collector_id)),
            "list collection requests by collector",
        )
        .await
    }

    async fn list_by_status(
        &self,
        status: CollectionStatus,
    ) -> Result<Vec<CollectionRequest>, MarketplaceError> {
        self.list_where(
            sea_orm::Condition::all()
                .add(collection_requests::Column::Status.eq(status.as_str())),
            "list collection requests by status",
        )
        .await
    }

    async fn try_accept(&self, id: i32, collector_id: i32) -> Result<bool, MarketplaceError> {
        let result = collection_requests::Entity::update_many()
            .col_expr(
                collection_requests::Column::CollectorId,
                Expr::value(collector_id),
            )
            .col_expr(
                collection_requests::Column::Status,
                Expr::value(CollectionStatus::Accepted.as_str()),
            )
            .filter(collection_requests::Column::Id.eq(id))
            .filter(collection_requests::Column::Status.eq(CollectionStatus::Requested.as_str()))
            .exec(&self.db)
            .await
            .context("accept collection request")?;
        Ok(result.rows_affected == 1)
    }

    async fn compare_and_set_status(
        &self,
        id: i32,
        from: CollectionStatus,
        to: CollectionStatus,
    ) -> Result<bool, MarketplaceError> {
        let result = collection_requests::Entity::update_many()
            .col_expr(collection_requests::Column::Status, Expr::value(to.as_str()))
            .filter(collection_requests::Column::Id.eq(id))
            .filter(collection_requests::Column::Status.eq(from.as_str()))
            .exec(&self.db)
            .await
            .context("update collection request status")?;
        Ok(result.rows_affected == 1)
    }
}

async fn insert_request(
    txn: &DatabaseTransaction,
    request: &NewCollectionRequest,
) -> Result<(collection_requests::Model, Vec<request_items::Model>), DbErr> {
    let model = collection_requests::ActiveModel {
        producer_id: Set(request.producer_id),
        collector_id: Set(None),
        created_at: Set(Utc::now()),
        window_start: Set(request.window_start),
        window_end: Set(request.window_end),
        status: Set(CollectionStatus::Requested.as_str().to_owned()),
        notes: Set(request.notes.clone()),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let mut items = Vec::with_capacity(request.items.len());
    for item in &request.items {
        let inserted = request_items::ActiveModel {
            request_id: Set(model.id),
            waste_type: Set(item.waste_type.clone()),
            quantity: Set(item.quantity),
            unit: Set(item.unit.clone()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        items.push(inserted);
    }

    Ok((model, items))
}

fn item_from_model(m: request_items::Model) -> RequestItem {
    RequestItem {
        id: m.id,
        waste_type: m.waste_type,
        quantity: m.quantity,
        unit: m.unit,
    }
}

fn request_from_model(
    m: collection_requests::Model,
    items: Vec<RequestItem>,
) -> Result<CollectionRequest, MarketplaceError> {
    let status = m
        .status
        .parse::<CollectionStatus>()
        .with_context(|| format!("collection request {} has stored status {:?}", m.id, m.status))?;
    Ok(CollectionRequest {
        id: m.id,
        producer_id: m.producer_id,
        collector_id: m.collector_id,
        created_at: m.created_at,
        window_start: m.window_start,
        window_end: m.window_end,
        status,
        notes: m.notes,
        items,
    })
}
