pub mod endpoints;
pub mod handler;
pub mod models;
