use dotenv::dotenv;
use std::env;

pub const DEFAULT_MOCKING_SERVICE_NAME: &str = "myTestService";

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    match dotenv() {
        Ok(path) => tracing::debug!("Loaded .env file from {}", path.display()),
        Err(_) => tracing::debug!("No .env file loaded"),
    }
}

/// Fetch an environment variable, falling back to `default` when unset or empty
pub fn get_env_var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Name reported in the `mockingService` attribute of every response
pub fn get_mocking_service_name() -> String {
    get_env_var_or("MOCKING_SERVICE_NAME", DEFAULT_MOCKING_SERVICE_NAME)
}
