pub mod context;
pub mod responses;
