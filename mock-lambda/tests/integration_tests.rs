#[cfg(test)]
mod tests {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use lambda_runtime::{Context, LambdaEvent};
    use serde_json::{json, Value};
    use mock_lambda::endpoints::{debug_echo, inventory};
    use mock_lambda::handler::handle_lambda;
    use mock_lambda::models::context::InvocationContext;
    use mock_shared::services::inventory_services::list_inventory;
    use mock_shared::utilities::config;
    use mock_shared::utilities::logging::init_tracing;
    use mock_shared::utilities::responses::ProxyResponse;

    const SAMPLE_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsImtpZCI6ImFiYyJ9.eyJzdWIiOiIxIn0.sig";

    fn body_of(response: &ProxyResponse) -> Value {
        assert_eq!(response.status_code, 200);
        assert!(!response.is_base64_encoded);
        serde_json::from_str(&response.body).expect("Response body is not JSON")
    }

    async fn invoke(payload: Value) -> Value {
        init_tracing();
        let response = handle_lambda(LambdaEvent::new(payload, Context::default()))
            .await
            .expect("Handler should never fail");
        body_of(&response)
    }

    #[tokio::test]
    async fn test_handler_decodes_bearer_token() {
        let body = invoke(json!({
            "headers": {"Authorization": format!("Bearer {}", SAMPLE_TOKEN)}
        }))
        .await;

        assert_eq!(body["token"]["header"]["kid"], json!("abc"));
        assert_eq!(body["token"]["payload"], json!({"sub": "1"}));
        assert_eq!(body["token"]["signature"], json!("sig"));
    }

    #[tokio::test]
    async fn test_handler_without_authorization_header() {
        let body = invoke(json!({"headers": {"Accept": "application/json"}})).await;
        assert_eq!(body["token"], json!("Expected an Authorization header to be set"));

        let body = invoke(json!({"headers": null})).await;
        assert_eq!(body["token"], json!("Expected an Authorization header to be set"));
    }

    #[tokio::test]
    async fn test_handler_with_malformed_authorization_header() {
        let body = invoke(json!({"headers": {"Authorization": "Basic dXNlcjpwYXNz"}})).await;
        let token = body["token"].as_str().expect("token should be an error string");
        assert!(token.contains("Basic dXNlcjpwYXNz"));
    }

    #[tokio::test]
    async fn test_handler_rejects_token_without_kid() {
        let token = encode(&Header::new(Algorithm::HS256), &json!({"sub": "1"}), &EncodingKey::from_secret(b"secret")).unwrap();
        let body = invoke(json!({"headers": {"Authorization": format!("Bearer {}", token)}})).await;
        assert_eq!(body["token"], json!("Invalid token: header has no key identifier (kid)"));
    }

    #[tokio::test]
    async fn test_handler_round_trips_signed_token() {
        let mut header = Header::new(Algorithm::HS256);
        header.kid = Some("signing-key-7".to_string());
        let claims = json!({"sub": "user-42", "aud": "mock-api", "exp": 2_000_000_000u64});
        let token = encode(&header, &claims, &EncodingKey::from_secret(b"secret")).unwrap();

        let body = invoke(json!({"headers": {"Authorization": format!("Bearer {}", token)}})).await;

        assert_eq!(body["token"]["header"], serde_json::to_value(&header).unwrap());
        assert_eq!(body["token"]["payload"], claims);
    }

    #[test]
    fn test_debug_echo_body() {
        let event = json!({
            "resource": "/mock",
            "headers": {"Authorization": format!("Bearer {}", SAMPLE_TOKEN)},
            "queryStringParameters": {"verbose": "true"},
            "requestContext": {
                "authorizer": {
                    "principalId": "user-1",
                    "effect": "Allow",
                    "jwks": "{\"keys\":[]}",
                    "claims": "{\"sub\":\"1\"}"
                }
            }
        });
        let context = InvocationContext {
            aws_request_id: "req-1".to_string(),
            log_group_name: "/aws/lambda/mock-lambda".to_string(),
            log_stream_name: "2026/10/19/[$LATEST]0123".to_string(),
            ..Default::default()
        };

        let body = body_of(&debug_echo::handler(event, context).unwrap());

        assert_eq!(body["mockingService"], json!(config::get_mocking_service_name()));
        assert_eq!(body["description"], json!(debug_echo::DESCRIPTION));
        assert_eq!(body["requestParams"], json!({"verbose": "true"}));
        assert_eq!(body["context"]["logGroupName"], json!("/aws/lambda/mock-lambda"));
        assert_eq!(body["context"]["logStreamName"], json!("2026/10/19/[$LATEST]0123"));
        assert_eq!(body["context"]["awsRequestId"], json!("req-1"));
        assert_eq!(body["token"]["header"]["kid"], json!("abc"));
        assert_eq!(body["effect"], json!(["Allow"]));
        assert_eq!(body["jwks"], json!({"keys": []}));
        assert_eq!(body["claims"], json!({"sub": "1"}));

        let authorizer = &body["event"]["requestContext"]["authorizer"];
        assert_eq!(authorizer["effect"], json!("see effect attribute below..."));
        assert_eq!(authorizer["jwks"], json!("see jwks attribute below..."));
        assert_eq!(authorizer["claims"], json!("see token attribute below..."));
        assert_eq!(authorizer["principalId"], json!("user-1"));
        assert_eq!(body["event"]["resource"], json!("/mock"));
    }

    #[test]
    fn test_debug_echo_without_authorizer() {
        let body = body_of(&debug_echo::handler(json!({}), InvocationContext::default()).unwrap());

        assert!(body.get("requestParams").is_none(), "absent query parameters should be omitted");
        assert_eq!(body["event"], json!({}));
        for field in ["effect", "jwks", "claims"] {
            let message = body[field].as_str().expect("missing authorizer data should be a string");
            assert!(message.contains("Do you have an authorizer assigned to this resource?"), "{}", message);
        }
    }

    #[test]
    fn test_inventory_body() {
        let event = json!({"headers": {"Authorization": format!("Bearer {}", SAMPLE_TOKEN)}});
        let body = body_of(&inventory::handler(&event).unwrap());

        let listed = body["inventory"].as_array().expect("inventory should be a list");
        assert_eq!(listed.len(), list_inventory().len());
        assert_eq!(listed[0], serde_json::to_value(&list_inventory()[0]).unwrap());
        assert_eq!(body["token"]["header"]["kid"], json!("abc"));
        assert_eq!(body["description"], json!(inventory::DESCRIPTION));
    }

    #[test]
    fn test_inventory_without_token() {
        let body = body_of(&inventory::handler(&json!({"queryStringParameters": {"class": "SUV"}})).unwrap());
        assert_eq!(body["token"], json!("Expected an Authorization header to be set"));
        assert_eq!(body["requestParams"], json!({"class": "SUV"}));
        assert!(!body["inventory"].as_array().unwrap().is_empty());

        let body = body_of(&inventory::handler(&json!({"queryStringParameters": null})).unwrap());
        assert!(body.get("requestParams").is_none());
    }
}
