pub mod config;
pub mod logging;
pub mod requests;
pub mod responses;
pub mod token_decoding;
