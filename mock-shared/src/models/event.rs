use std::collections::HashMap;
use serde_json::Value;

pub const EFFECT_FIELD: &str = "effect";
pub const JWKS_FIELD: &str = "jwks";
pub const CLAIMS_FIELD: &str = "claims";

/// The parts of an API Gateway proxy event the token inspection reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockRequest {
    pub headers: HashMap<String, String>,
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl MockRequest {
    /// Builds a request view from the raw event. Entries that are not strings
    /// are skipped, and a null or missing header object becomes an empty map.
    pub fn from_event(event: &Value) -> Self {
        MockRequest {
            headers: string_map(event.get("headers")).unwrap_or_default(),
            query_string_parameters: string_map(event.get("queryStringParameters")),
        }
    }

    /// Looks a header up by its exact name first, then case-insensitively.
    /// When several casings are present and none matches exactly, the
    /// lexicographically smallest key wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.headers.get(name) {
            return Some(value.as_str());
        }
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, value)| value.as_str())
    }
}

fn string_map(value: Option<&Value>) -> Option<HashMap<String, String>> {
    value?.as_object().map(|object| {
        object
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_string())))
            .collect()
    })
}

/// Data a custom Lambda authorizer packed into `requestContext.authorizer`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorizerFields {
    pub effect: Option<String>,
    pub jwks: Option<String>,
    pub claims: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Authorizer {
    Present(AuthorizerFields),
    Absent,
}

impl Authorizer {
    pub fn from_event(event: &Value) -> Self {
        match event
            .get("requestContext")
            .and_then(|context| context.get("authorizer"))
            .and_then(Value::as_object)
        {
            Some(authorizer) => {
                // Empty strings count as missing, the authorizer only ever sends them when unset
                let field = |name: &str| {
                    authorizer
                        .get(name)
                        .and_then(Value::as_str)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                };
                Authorizer::Present(AuthorizerFields {
                    effect: field(EFFECT_FIELD),
                    jwks: field(JWKS_FIELD),
                    claims: field(CLAIMS_FIELD),
                })
            }
            None => Authorizer::Absent,
        }
    }
}
