use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use coleta_domain::user_type::UserType;

use crate::error::MarketplaceError;
use crate::state::AppState;
use crate::usecase::login::{LoginInput, LoginUseCase};
use crate::usecase::token::refresh_access_token;

// ── POST /login/ ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default, alias = "email")]
    pub email_or_document: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub refresh: String,
    pub access: String,
    pub user_type: UserType,
    pub name: String,
}

pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<LoginRequest>, MarketplaceError>,
) -> Result<impl IntoResponse, MarketplaceError> {
    let usecase = LoginUseCase {
        producers: state.producer_repo(),
        collectors: state.collector_repo(),
        cooperatives: state.cooperative_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };

    let out = usecase
        .execute(LoginInput {
            email_or_document: body.email_or_document,
            password: body.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        refresh: out.tokens.refresh,
        access: out.tokens.access,
        user_type: out.user_type,
        name: out.name,
    }))
}

// ── POST /token/refresh/ ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub access: String,
}

pub async fn refresh_token(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RefreshRequest>, MarketplaceError>,
) -> Result<impl IntoResponse, MarketplaceError> {
    let access = refresh_access_token(&body.refresh, &state.jwt_secret)?;
    Ok(Json(RefreshResponse { access }))
}
