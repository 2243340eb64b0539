pub mod auth;
pub mod cooperatives;
pub mod register;
pub mod requests;
