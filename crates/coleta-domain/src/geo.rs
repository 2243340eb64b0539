//! Addresses and geocoded points.

use serde::{Deserialize, Serialize};

/// WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Postal address as submitted at registration. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Address {
    /// Free-text query for a geocoding lookup.
    ///
    /// Parts are joined in the order street, number, neighborhood, city,
    /// state, postal code; blank parts are skipped. Returns `None` when
    /// nothing is left to look up.
    pub fn geocoding_query(&self) -> Option<String> {
        let parts: Vec<&str> = [
            &self.street,
            &self.number,
            &self.neighborhood,
            &self.city,
            &self.state,
            &self.postal_code,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref().map(str::trim))
        .filter(|part| !part.is_empty())
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
