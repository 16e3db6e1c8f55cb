use serde::Serialize;
use serde_json::Value;
use crate::models::event::{Authorizer, CLAIMS_FIELD, EFFECT_FIELD, JWKS_FIELD};

pub const EFFECT_PLACEHOLDER: &str = "see effect attribute below...";
pub const JWKS_PLACEHOLDER: &str = "see jwks attribute below...";
pub const CLAIMS_PLACEHOLDER: &str = "see token attribute below...";

/// A value lifted out of the authorizer context, or the reason it could not be.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Promoted<T> {
    Value(T),
    Unavailable(String),
}

/// Authorizer data promoted to top-level response attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorizerContext {
    pub effect: Promoted<Vec<String>>,
    pub jwks: Promoted<Value>,
    pub claims: Promoted<Value>,
}

/// The authorizer packs the policy effect, the JWKS and the token claims into
/// strings. Unpack them, and swap the packed strings in the event for short
/// placeholders so the echoed event stays readable.
pub fn reshape_event(event: &mut Value) -> AuthorizerContext {
    let fields = match Authorizer::from_event(event) {
        Authorizer::Present(fields) => fields,
        Authorizer::Absent => {
            tracing::warn!("No authorizer data on the request context");
            Default::default()
        }
    };

    let effect = match fields.effect {
        Some(effect) => {
            replace_field(event, EFFECT_FIELD, EFFECT_PLACEHOLDER);
            Promoted::Value(effect.split(' ').map(str::to_string).collect())
        }
        None => Promoted::Unavailable(missing_message(EFFECT_FIELD)),
    };
    let jwks = promote_json(event, JWKS_FIELD, fields.jwks, JWKS_PLACEHOLDER);
    let claims = promote_json(event, CLAIMS_FIELD, fields.claims, CLAIMS_PLACEHOLDER);

    AuthorizerContext { effect, jwks, claims }
}

fn promote_json(event: &mut Value, field: &str, raw: Option<String>, placeholder: &str) -> Promoted<Value> {
    let Some(raw) = raw else {
        return Promoted::Unavailable(missing_message(field));
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(parsed) => {
            replace_field(event, field, placeholder);
            Promoted::Value(parsed)
        }
        Err(err) => {
            tracing::warn!("Authorizer {} is not valid JSON: {}", field, err);
            Promoted::Unavailable(format!(
                "event.requestContext.authorizer.{} is not valid JSON: {}",
                field, err
            ))
        }
    }
}

fn replace_field(event: &mut Value, field: &str, placeholder: &str) {
    if let Some(authorizer) = event
        .pointer_mut("/requestContext/authorizer")
        .and_then(Value::as_object_mut)
    {
        authorizer.insert(field.to_string(), Value::String(placeholder.to_string()));
    }
}

fn missing_message(field: &str) -> String {
    format!(
        "event.requestContext.authorizer.{} is null. Do you have an authorizer assigned to this resource?",
        field
    )
}
