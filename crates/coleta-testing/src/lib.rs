//! Test utilities for Coleta services.
//!
//! Import from `[dev-dependencies]` only.

pub mod auth;
