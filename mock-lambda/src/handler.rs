use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use mock_shared::utilities::logging::invocation_span;
use mock_shared::utilities::responses::ProxyResponse;
use crate::endpoints::{debug_echo, inventory};
use crate::models::context::InvocationContext;

/// Which body the deployment serves is fixed when the binary is built, see the
/// `inventory` feature.
pub async fn handle_lambda(event: LambdaEvent<Value>) -> Result<ProxyResponse, Error> {
    let context = InvocationContext::from(&event.context);
    let payload = event.payload;

    let span = invocation_span(&context.aws_request_id, &context.log_group_name, &context.log_stream_name);
    span.in_scope(|| -> Result<ProxyResponse, Error> {
        tracing::info!("logGroupName: {}", context.log_group_name);
        tracing::info!("logStreamName: {}", context.log_stream_name);
        tracing::debug!("Received event {}", payload);

        let response = if cfg!(feature = "inventory") {
            inventory::handler(&payload)?
        } else {
            debug_echo::handler(payload, context)?
        };

        Ok(response)
    })
}
