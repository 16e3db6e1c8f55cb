pub mod auth;
pub mod errors;
pub mod event;
pub mod inventory;
