use serde::Serialize;
use serde_json::{Map, Value};
use crate::models::errors::TokenError;

/// A compact token split into its parts. Nothing here has been verified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedToken {
    pub header: Map<String, Value>,
    pub payload: Map<String, Value>,
    pub signature: String, // raw third segment, still base64url
}

/// What ends up in the `token` attribute of a response: either the decoded
/// token or the message of whatever stopped us from decoding it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenInspection {
    Decoded(DecodedToken),
    Failed(String),
}

impl From<Result<DecodedToken, TokenError>> for TokenInspection {
    fn from(result: Result<DecodedToken, TokenError>) -> Self {
        match result {
            Ok(decoded) => TokenInspection::Decoded(decoded),
            Err(err) => TokenInspection::Failed(err.to_string()),
        }
    }
}
