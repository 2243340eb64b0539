use chrono::{DateTime, Utc};
use serde::Serialize;

use coleta_core::serde::to_rfc3339_ms;
use coleta_domain::geo::{Address, GeoPoint};
use coleta_domain::status::CollectionStatus;
use coleta_domain::user_type::UserType;

// ── Accounts ─────────────────────────────────────────────────────────────────

/// Registration payload shared by the three account kinds.
///
/// `name` holds the company name for cooperatives. Collectors only keep the
/// postal code, city and state parts of `address`.
#[derive(Debug, Clone)]
pub struct AccountDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub document: String,
    pub address: Address,
}

/// Row to insert once the draft is validated, hashed and geocoded.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub document: String,
    pub address: Address,
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Producer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub document: String,
    #[serde(flatten)]
    pub address: Address,
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collector {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub document: String,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub location: Option<GeoPoint>,
    pub rating: f64,
    pub rating_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cooperative {
    pub id: i32,
    pub company_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub document: String,
    #[serde(flatten)]
    pub address: Address,
    pub location: Option<GeoPoint>,
}

/// Public subset of a producer shown on a request's detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducerSummary {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Stored login material for one account row.
#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: i32,
    pub user_type: UserType,
    pub name: String,
    pub password_hash: String,
}

/// Column a login identifier is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupField {
    Email,
    Document,
}

// ── Collection requests ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct NewRequestItem {
    pub waste_type: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCollectionRequest {
    pub producer_id: i32,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub notes: Option<String>,
    pub items: Vec<NewRequestItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestItem {
    pub id: i32,
    pub waste_type: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionRequest {
    pub id: i32,
    pub producer_id: i32,
    pub collector_id: Option<i32>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub window_start: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub window_end: DateTime<Utc>,
    pub status: CollectionStatus,
    pub notes: Option<String>,
    pub items: Vec<RequestItem>,
}

/// A request together with the producer who opened it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionRequestDetail {
    #[serde(flatten)]
    pub request: CollectionRequest,
    pub producer: Option<ProducerSummary>,
}
