use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use coleta_auth_types::identity::Identity;
use coleta_domain::user_type::UserType;

use crate::domain::types::NewRequestItem;
use crate::error::MarketplaceError;
use crate::state::AppState;
use crate::usecase::requests::{
    AcceptRequestUseCase, CreateRequestInput, CreateRequestUseCase, GetRequestDetailUseCase,
    ListAvailableRequestsUseCase, ListCollectorRequestsUseCase, ListProducerRequestsUseCase,
    UpdateStatusUseCase,
};

// ── POST /coletas/solicitar/ ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRequestItem {
    pub waste_type: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Deserialize)]
pub struct CreateRequestBody {
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<CreateRequestItem>,
}

pub async fn create_request(
    State(state): State<AppState>,
    identity: Identity,
    WithRejection(Json(body), _): WithRejection<Json<CreateRequestBody>, MarketplaceError>,
) -> Result<impl IntoResponse, MarketplaceError> {
    let producer_id = identity.require(UserType::Producer)?;

    let usecase = CreateRequestUseCase {
        requests: state.request_repo(),
    };

    let created = usecase
        .execute(CreateRequestInput {
            producer_id,
            window_start: body.window_start,
            window_end: body.window_end,
            notes: body.notes,
            items: body
                .items
                .into_iter()
                .map(|i| NewRequestItem {
                    waste_type: i.waste_type,
                    quantity: i.quantity,
                    unit: i.unit,
                })
                .collect(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// ── GET /coletas/minhas/ ─────────────────────────────────────────────────────

pub async fn list_my_requests(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, MarketplaceError> {
    let producer_id = identity.require(UserType::Producer)?;
    let usecase = ListProducerRequestsUseCase {
        requests: state.request_repo(),
    };
    Ok(Json(usecase.execute(producer_id).await?))
}

// ── GET /coletas/minhas_coletor/ ─────────────────────────────────────────────

pub async fn list_assigned_requests(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, MarketplaceError> {
    let collector_id = identity.require(UserType::Collector)?;
    let usecase = ListCollectorRequestsUseCase {
        requests: state.request_repo(),
    };
    Ok(Json(usecase.execute(collector_id).await?))
}

// ── GET /coletas/disponiveis/ ────────────────────────────────────────────────

pub async fn list_available_requests(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, MarketplaceError> {
    let usecase = ListAvailableRequestsUseCase {
        requests: state.request_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── GET /coletas/{id}/ ───────────────────────────────────────────────────────

pub async fn get_request(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, MarketplaceError>,
) -> Result<impl IntoResponse, MarketplaceError> {
    let usecase = GetRequestDetailUseCase {
        requests: state.request_repo(),
        producers: state.producer_repo(),
    };
    Ok(Json(usecase.execute(id).await?))
}

// ── POST /coletas/{id}/aceitar/ ──────────────────────────────────────────────

pub async fn accept_request(
    State(state): State<AppState>,
    identity: Identity,
    WithRejection(Path(id), _): WithRejection<Path<i32>, MarketplaceError>,
) -> Result<impl IntoResponse, MarketplaceError> {
    let collector_id = identity.require(UserType::Collector)?;
    let usecase = AcceptRequestUseCase {
        requests: state.request_repo(),
    };
    Ok(Json(usecase.execute(id, collector_id).await?))
}

// ── PATCH /coletas/{id}/status/ ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateStatusBody {
    pub status: String,
}

pub async fn update_status(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, MarketplaceError>,
    WithRejection(Json(body), _): WithRejection<Json<UpdateStatusBody>, MarketplaceError>,
) -> Result<impl IntoResponse, MarketplaceError> {
    let usecase = UpdateStatusUseCase {
        requests: state.request_repo(),
    };
    Ok(Json(usecase.execute(id, &body.status).await?))
}
