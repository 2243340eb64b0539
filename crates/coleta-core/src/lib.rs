//! HTTP plumbing shared by Coleta services: error bodies, health probes,
//! request ids, timestamp serialization and tracing setup.

pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
