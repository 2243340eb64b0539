pub mod cooperatives;
pub mod login;
pub mod register;
pub mod requests;
pub mod token;
