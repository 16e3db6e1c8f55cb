// Response bodies for the two endpoint variants. They only make sense next to
// the endpoints, so they live here rather than in the shared crate.

use std::collections::HashMap;
use serde::Serialize;
use serde_json::Value;
use mock_shared::models::auth::TokenInspection;
use mock_shared::models::inventory::Vehicle;
use mock_shared::services::authorizer_context::Promoted;
use crate::models::context::InvocationContext;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugEchoResponse {
    pub mocking_service: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_params: Option<HashMap<String, String>>,
    pub event: Value,
    pub context: InvocationContext,
    pub token: TokenInspection,
    pub effect: Promoted<Vec<String>>,
    pub jwks: Promoted<Value>,
    pub claims: Promoted<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    pub mocking_service: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_params: Option<HashMap<String, String>>,
    pub token: TokenInspection,
    pub inventory: Vec<Vehicle>,
}
