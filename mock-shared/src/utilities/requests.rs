use once_cell::sync::Lazy;
use regex::Regex;
use crate::models::errors::TokenError;
use crate::models::event::MockRequest;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

static BEARER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Bearer (.+)$").unwrap());

/// Extracts the Bearer token from the Authorization header.
pub fn extract_bearer_token(request: &MockRequest) -> Result<&str, TokenError> {
    tracing::debug!(headers = ?request.headers, "Extracting bearer token");

    let auth_header = request
        .header(AUTHORIZATION_HEADER)
        .ok_or(TokenError::MissingHeader)?;

    BEARER_PATTERN
        .captures(auth_header)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str())
        .ok_or_else(|| TokenError::MalformedHeader(auth_header.to_string()))
}
