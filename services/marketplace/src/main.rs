use sea_orm::Database;
use tracing::info;

use coleta_core::tracing::init_tracing;
use coleta_marketplace::config::MarketplaceConfig;
use coleta_marketplace::infra::geocoder::HttpGeocoder;
use coleta_marketplace::router::build_router;
use coleta_marketplace::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = MarketplaceConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let geocoder = match config.geocoder_url {
        Some(url) => HttpGeocoder::new(
            url,
            config.geocoder_user_agent,
            config.geocoder_timeout,
            config.geocoder_country_codes,
        )
        .expect("failed to build geocoder client"),
        None => {
            info!("GEOCODER_URL is empty, geocoding disabled");
            HttpGeocoder::disabled()
        }
    };

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        geocoder,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.marketplace_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("marketplace service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
