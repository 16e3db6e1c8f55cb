use thiserror::Error;

/// Failures while pulling a bearer token out of a request and decoding it.
///
/// The handler never turns these into HTTP errors: the display string is
/// returned to the caller in place of the decoded token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Expected an Authorization header to be set")]
    MissingHeader,

    #[error("Invalid Authorization token - {0} does not match \"Bearer .*\"")]
    MalformedHeader(String),

    #[error("Failed to decode token: {0}")]
    Decode(String),

    #[error("Invalid token: header has no key identifier (kid)")]
    InvalidToken,
}

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
