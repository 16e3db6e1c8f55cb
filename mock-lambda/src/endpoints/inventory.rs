use serde_json::Value;
use mock_shared::models::auth::TokenInspection;
use mock_shared::models::errors::ResponseError;
use mock_shared::models::event::MockRequest;
use mock_shared::services::inventory_services::list_inventory;
use mock_shared::utilities::config;
use mock_shared::utilities::responses::{success_response, ProxyResponse};
use mock_shared::utilities::token_decoding::inspect_token;
use crate::models::responses::InventoryResponse;

pub const DESCRIPTION: &str = "This is a demo service returning a static vehicle inventory. \
The token attribute shows the access token presented with the request.";

pub fn handler(event: &Value) -> Result<ProxyResponse, ResponseError> {
    let request = MockRequest::from_event(event);

    let inspected = inspect_token(&request);
    if let Err(err) = &inspected {
        tracing::warn!("Could not inspect bearer token: {}", err);
    }

    let inventory = list_inventory();
    tracing::info!("Returning {} inventory records", inventory.len());

    success_response(InventoryResponse {
        mocking_service: config::get_mocking_service_name(),
        description: DESCRIPTION.to_string(),
        request_params: request.query_string_parameters,
        token: TokenInspection::from(inspected),
        inventory,
    })
}
