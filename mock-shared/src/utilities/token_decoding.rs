use base64::Engine;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};
use crate::models::auth::DecodedToken;
use crate::models::errors::TokenError;
use crate::models::event::MockRequest;
use crate::utilities::requests::extract_bearer_token;

// Compact tokens are unpadded, but tolerate padded segments as well
const URL_SAFE_ANY_PAD: GeneralPurpose = GeneralPurpose::new(
    &URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Extracts the bearer token from the request and decodes it.
pub fn inspect_token(request: &MockRequest) -> Result<DecodedToken, TokenError> {
    let token = extract_bearer_token(request)?;
    decode_token(token)
}

/// Decodes the header and payload of a compact token without verifying its
/// signature. Only tokens carrying a `kid` in their header are accepted.
pub fn decode_token(token: &str) -> Result<DecodedToken, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header, payload, signature] = segments.as_slice() else {
        return Err(TokenError::Decode(format!(
            "expected 3 dot-separated segments, found {}",
            segments.len()
        )));
    };
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(TokenError::Decode("token contains an empty segment".to_string()));
    }

    let header = decode_segment(header, "header")?;
    let payload = decode_segment(payload, "payload")?;

    if !header.get("kid").is_some_and(is_truthy) {
        return Err(TokenError::InvalidToken);
    }

    Ok(DecodedToken {
        header,
        payload,
        signature: signature.to_string(),
    })
}

// Unset-looking values (null, false, 0, "") do not name a key
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn decode_segment(segment: &str, name: &str) -> Result<Map<String, Value>, TokenError> {
    let bytes = URL_SAFE_ANY_PAD
        .decode(segment)
        .map_err(|err| TokenError::Decode(format!("{} is not valid base64url: {}", name, err)))?;

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(TokenError::Decode(format!("{} is not a JSON object", name))),
        Err(err) => Err(TokenError::Decode(format!("{} is not valid JSON: {}", name, err))),
    }
}
