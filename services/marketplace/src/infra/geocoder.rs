//! Nominatim-compatible geocoding adapter.
//!
//! One `search` call per lookup, no retry and no cache. Every failure is
//! logged at `warn` and reported to callers as "no location".

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::warn;

use coleta_domain::geo::{Address, GeoPoint};

use crate::domain::repository::GeocoderPort;

#[derive(Debug, thiserror::Error)]
enum GeocodeError {
    #[error("invalid geocoder url: {0}")]
    Url(String),
    #[error("geocoder request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("geocoder answered {0}")]
    Status(reqwest::StatusCode),
    #[error("undecodable geocoder payload: {0}")]
    Decode(String),
}

/// One entry of a Nominatim `format=json` search response. Coordinates are
/// sent as decimal strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

#[derive(Clone)]
pub struct HttpGeocoder {
    client: Client,
    endpoint: Option<String>,
    user_agent: String,
    country_codes: String,
}

impl HttpGeocoder {
    /// Build a geocoder whose client enforces `timeout` on every request.
    pub fn new(
        endpoint: String,
        user_agent: String,
        timeout: Duration,
        country_codes: String,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: Some(endpoint),
            user_agent,
            country_codes,
        })
    }

    /// A geocoder that never leaves the process and always answers `None`.
    pub fn disabled() -> Self {
        Self {
            client: Client::new(),
            endpoint: None,
            user_agent: String::new(),
            country_codes: String::new(),
        }
    }

    async fn search(&self, endpoint: &str, query: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        let url = search_url(endpoint, query, &self.country_codes)?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status));
        }

        let body = response.bytes().await?;
        first_point(body.as_ref())
    }
}

impl GeocoderPort for HttpGeocoder {
    async fn locate(&self, address: &Address) -> Option<GeoPoint> {
        let endpoint = self.endpoint.as_deref()?;
        let query = address.geocoding_query()?;

        match self.search(endpoint, &query).await {
            Ok(point) => point,
            Err(e) => {
                warn!(error = %e, query = %query, "geocoding failed");
                None
            }
        }
    }
}

fn search_url(endpoint: &str, query: &str, country_codes: &str) -> Result<Url, GeocodeError> {
    let mut params = vec![("q", query), ("format", "json"), ("limit", "1")];
    if !country_codes.is_empty() {
        params.push(("countrycodes", country_codes));
    }
    Url::parse_with_params(endpoint, &params).map_err(|e| GeocodeError::Url(e.to_string()))
}

fn first_point(body: &[u8]) -> Result<Option<GeoPoint>, GeocodeError> {
    let places: Vec<Place> =
        serde_json::from_slice(body).map_err(|e| GeocodeError::Decode(e.to_string()))?;
    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    let latitude = place
        .lat
        .parse::<f64>()
        .map_err(|e| GeocodeError::Decode(format!("lat {:?}: {e}", place.lat)))?;
    let longitude = place
        .lon
        .parse::<f64>()
        .map_err(|e| GeocodeError::Decode(format!("lon {:?}: {e}", place.lon)))?;

    Ok(Some(GeoPoint {
        latitude,
        longitude,
    }))
}
