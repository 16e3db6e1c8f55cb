use serde_json::Value;
use mock_shared::models::auth::TokenInspection;
use mock_shared::models::errors::ResponseError;
use mock_shared::models::event::MockRequest;
use mock_shared::services::authorizer_context::reshape_event;
use mock_shared::utilities::config;
use mock_shared::utilities::responses::{success_response, ProxyResponse};
use mock_shared::utilities::token_decoding::inspect_token;
use crate::models::context::InvocationContext;
use crate::models::responses::DebugEchoResponse;

pub const DESCRIPTION: &str = "This is a demo service designed to show the request context and data from our Lambda Authorizer. \
Below are the event and context passed to this API. Below those are the effect of the policy decision, \
the jwks from our auth server, and the claims presented in the access token consumed by the Lambda authorizer";

/// Echoes the event and context back, along with the decoded bearer token and
/// whatever the authorizer passed along.
pub fn handler(mut event: Value, context: InvocationContext) -> Result<ProxyResponse, ResponseError> {
    let request = MockRequest::from_event(&event);

    let inspected = inspect_token(&request);
    if let Err(err) = &inspected {
        tracing::warn!("Could not inspect bearer token: {}", err);
    }
    let token = TokenInspection::from(inspected);

    tracing::info!("event.queryStringParameters follows... {:?}", request.query_string_parameters);

    let authorizer = reshape_event(&mut event);

    success_response(DebugEchoResponse {
        mocking_service: config::get_mocking_service_name(),
        description: DESCRIPTION.to_string(),
        request_params: request.query_string_parameters,
        event,
        context,
        token,
        effect: authorizer.effect,
        jwks: authorizer.jwks,
        claims: authorizer.claims,
    })
}
