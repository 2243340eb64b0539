use axum::{Json, extract::State, response::IntoResponse};

use crate::error::MarketplaceError;
use crate::state::AppState;
use crate::usecase::cooperatives::ListCooperativesUseCase;

// ── GET /cooperativas/ ───────────────────────────────────────────────────────

pub async fn list_cooperatives(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, MarketplaceError> {
    let usecase = ListCooperativesUseCase {
        cooperatives: state.cooperative_repo(),
    };
    Ok(Json(usecase.execute().await?))
}
