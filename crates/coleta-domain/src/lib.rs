//! Domain types shared across Coleta crates.
//!
//! Pure types with no framework dependencies: actor kinds, the
//! collection-request lifecycle and address/geo values.

pub mod geo;
pub mod status;
pub mod user_type;
