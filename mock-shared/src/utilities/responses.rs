use http::StatusCode;
use serde::{Deserialize, Serialize};
use crate::models::errors::ResponseError;

/// The object API Gateway expects back from a proxy integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub is_base64_encoded: bool,
    pub body: String,
}

pub fn success_response<T: Serialize>(data: T) -> Result<ProxyResponse, ResponseError> {
    response_with_code(data, StatusCode::OK)
}

pub fn response_with_code<T: Serialize>(data: T, code: StatusCode) -> Result<ProxyResponse, ResponseError> {
    let body = serde_json::to_string(&data).map_err(|e| {
        tracing::error!("Failed to serialize response body: {:?}", e);
        ResponseError::from(e)
    })?;
    let response = ProxyResponse {
        status_code: code.as_u16(),
        is_base64_encoded: false,
        body,
    };
    tracing::info!("Response Code:{}\nBody: {}", code, response.body);
    Ok(response)
}
