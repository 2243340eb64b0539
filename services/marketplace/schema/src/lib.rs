//! sea-orm entities for the marketplace database.

pub mod collection_requests;
pub mod collectors;
pub mod cooperatives;
pub mod producers;
pub mod request_items;
