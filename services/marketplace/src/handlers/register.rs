use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use coleta_domain::geo::Address;

use crate::domain::types::AccountDraft;
use crate::error::MarketplaceError;
use crate::state::AppState;
use crate::usecase::register::RegisterUseCase;

// Required strings default to empty so validation can name the missing field.

#[derive(Deserialize)]
pub struct RegisterProducerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub document: String,
    #[serde(flatten)]
    pub address: Address,
}

#[derive(Deserialize)]
pub struct RegisterCollectorRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub document: String,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterCooperativeRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub document: String,
    #[serde(flatten)]
    pub address: Address,
}

// ── POST /register/producer/ ─────────────────────────────────────────────────

pub async fn register_producer(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RegisterProducerRequest>, MarketplaceError>,
) -> Result<impl IntoResponse, MarketplaceError> {
    let usecase = RegisterUseCase {
        accounts: state.producer_repo(),
        geocoder: state.geocoder.clone(),
    };

    let producer = usecase
        .execute(AccountDraft {
            name: body.name,
            email: body.email,
            password: body.password,
            phone: body.phone,
            document: body.document,
            address: body.address,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(producer)))
}

// ── POST /register/collector/ ────────────────────────────────────────────────

pub async fn register_collector(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RegisterCollectorRequest>, MarketplaceError>,
) -> Result<impl IntoResponse, MarketplaceError> {
    let usecase = RegisterUseCase {
        accounts: state.collector_repo(),
        geocoder: state.geocoder.clone(),
    };

    let collector = usecase
        .execute(AccountDraft {
            name: body.name,
            email: body.email,
            password: body.password,
            phone: body.phone,
            document: body.document,
            address: Address {
                postal_code: body.postal_code,
                city: body.city,
                state: body.state,
                ..Default::default()
            },
        })
        .await?;

    Ok((StatusCode::CREATED, Json(collector)))
}

// ── POST /register/cooperative/ ──────────────────────────────────────────────

pub async fn register_cooperative(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<
        Json<RegisterCooperativeRequest>,
        MarketplaceError,
    >,
) -> Result<impl IntoResponse, MarketplaceError> {
    let usecase = RegisterUseCase {
        accounts: state.cooperative_repo(),
        geocoder: state.geocoder.clone(),
    };

    let cooperative = usecase
        .execute(AccountDraft {
            name: body.company_name,
            email: body.email,
            password: body.password,
            phone: body.phone,
            document: body.document,
            address: body.address,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(cooperative)))
}
