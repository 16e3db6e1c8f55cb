use lambda_runtime::Context;
use serde::Serialize;

/// The invocation context as echoed back to the caller, using the attribute
/// names of the platform's own context object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContext {
    pub function_name: String,
    pub function_version: String,
    pub invoked_function_arn: String,
    #[serde(rename = "memoryLimitInMB")]
    pub memory_limit_in_mb: i32,
    pub aws_request_id: String,
    pub log_group_name: String,
    pub log_stream_name: String,
}

impl From<&Context> for InvocationContext {
    fn from(context: &Context) -> Self {
        InvocationContext {
            function_name: context.env_config.function_name.clone(),
            function_version: context.env_config.version.clone(),
            invoked_function_arn: context.invoked_function_arn.clone(),
            memory_limit_in_mb: context.env_config.memory,
            aws_request_id: context.request_id.clone(),
            log_group_name: context.env_config.log_group.clone(),
            log_stream_name: context.env_config.log_stream.clone(),
        }
    }
}
