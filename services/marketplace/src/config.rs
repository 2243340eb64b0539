use std::time::Duration;

/// Marketplace service configuration loaded from environment variables.
#[derive(Debug)]
pub struct MarketplaceConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing and validating JWTs. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 8000). Env var: `MARKETPLACE_PORT`.
    pub marketplace_port: u16,
    /// Nominatim-compatible search endpoint. `None` when `GEOCODER_URL` is set empty.
    pub geocoder_url: Option<String>,
    pub geocoder_user_agent: String,
    pub geocoder_timeout: Duration,
    /// Comma-separated ISO 3166-1 codes passed as `countrycodes` (default "br").
    pub geocoder_country_codes: String,
}

const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

impl MarketplaceConfig {
    pub fn from_env() -> Self {
        let geocoder_url = match std::env::var("GEOCODER_URL") {
            Ok(v) if v.trim().is_empty() => None,
            Ok(v) => Some(v),
            Err(_) => Some(DEFAULT_GEOCODER_URL.to_owned()),
        };

        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            marketplace_port: std::env::var("MARKETPLACE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            geocoder_url,
            geocoder_user_agent: std::env::var("GEOCODER_USER_AGENT")
                .unwrap_or_else(|_| "coleta-marketplace/0.1".to_owned()),
            geocoder_timeout: Duration::from_secs(
                std::env::var("GEOCODER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
            geocoder_country_codes: std::env::var("GEOCODER_COUNTRY_CODES")
                .unwrap_or_else(|_| "br".to_owned()),
        }
    }
}
