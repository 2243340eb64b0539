use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use coleta_core::health::{healthz, readiness};
use coleta_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    auth::{login, refresh_token},
    cooperatives::list_cooperatives,
    register::{register_collector, register_cooperative, register_producer},
    requests::{
        accept_request, create_request, get_request, list_assigned_requests,
        list_available_requests, list_my_requests, update_status,
    },
};
use crate::state::AppState;

/// `GET /readyz`: ready once the database answers a ping.
async fn readyz(State(state): State<AppState>) -> StatusCode {
    readiness(state.db.ping().await)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Registration
        .route("/register/producer/", post(register_producer))
        .route("/register/collector/", post(register_collector))
        .route("/register/cooperative/", post(register_cooperative))
        // Auth
        .route("/login/", post(login))
        .route("/token/refresh/", post(refresh_token))
        // Collection requests
        .route("/coletas/solicitar/", post(create_request))
        .route("/coletas/minhas/", get(list_my_requests))
        .route("/coletas/minhas_coletor/", get(list_assigned_requests))
        .route("/coletas/disponiveis/", get(list_available_requests))
        .route("/coletas/{id}/", get(get_request))
        .route("/coletas/{id}/aceitar/", post(accept_request))
        .route("/coletas/{id}/status/", patch(update_status))
        // Cooperatives
        .route("/cooperativas/", get(list_cooperatives))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
