//! Turns a received HTTP status and body into a payload or a classified error.

use serde_json::Value;

use crate::error::GatewayError;
use crate::RawPayload;

/// Classify a response that did arrive.
///
/// - 2xx with a JSON body (anything but `null`) is a payload.
/// - Non-2xx with `{"detail": "<non-empty text>"}` is [`GatewayError::Server`].
/// - Everything else is [`GatewayError::Unexpected`].
pub fn classify_response(status: u16, body: &str) -> Result<RawPayload, GatewayError> {
    let parsed = if body.trim().is_empty() {
        Err("empty response body".to_string())
    } else {
        serde_json::from_str::<Value>(body).map_err(|e| format!("invalid JSON: {e}"))
    };

    if (200..300).contains(&status) {
        return match parsed {
            Ok(Value::Null) => Err(GatewayError::unexpected(status, "null response body")),
            Ok(payload) => Ok(payload),
            Err(reason) => Err(GatewayError::unexpected(status, reason)),
        };
    }

    let detail = parsed
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
        .filter(|d| !d.trim().is_empty());

    match detail {
        Some(detail) => Err(GatewayError::server(status, detail)),
        None => Err(GatewayError::unexpected(
            status,
            "error status without a detail message",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_returns_payload() {
        let payload = classify_response(200, r#"{"advice":"rest"}"#).unwrap();
        assert_eq!(payload, json!({"advice": "rest"}));
    }

    #[test]
    fn test_success_with_non_object_json_is_still_a_payload() {
        assert_eq!(classify_response(200, "[1,2]").unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_success_with_garbage_is_unexpected() {
        let err = classify_response(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, GatewayError::Unexpected { status: 200, .. }));
    }

    #[test]
    fn test_success_with_empty_or_null_body_is_unexpected() {
        assert!(matches!(
            classify_response(204, "").unwrap_err(),
            GatewayError::Unexpected { .. }
        ));
        assert!(matches!(
            classify_response(200, "null").unwrap_err(),
            GatewayError::Unexpected { .. }
        ));
    }

    #[test]
    fn test_error_with_detail_is_server_error() {
        let err = classify_response(400, r#"{"detail":"user not found"}"#).unwrap_err();
        assert_eq!(err, GatewayError::server(400, "user not found"));
        assert_eq!(err.user_message(), "user not found");
    }

    #[test]
    fn test_error_with_structured_detail_is_unexpected() {
        let body = r#"{"detail":[{"loc":["body","username"],"msg":"field required"}]}"#;
        let err = classify_response(422, body).unwrap_err();
        assert!(matches!(err, GatewayError::Unexpected { status: 422, .. }));
    }

    #[test]
    fn test_error_without_json_is_unexpected() {
        let err = classify_response(502, "Bad Gateway").unwrap_err();
        assert!(matches!(err, GatewayError::Unexpected { status: 502, .. }));
    }

    #[test]
    fn test_error_with_blank_detail_is_unexpected() {
        let err = classify_response(500, r#"{"detail":"  "}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Unexpected { .. }));
    }
}
