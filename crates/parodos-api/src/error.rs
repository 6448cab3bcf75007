// Error replies
//
// The JSON wire shape for failures plus the classifier mapping registry
// errors to status codes. Classification is a variant match only; message
// text and wrapped causes never participate in the decision.

use axum::http::StatusCode;
use axum::Json;
use parodos_core::RegistryError;
use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct HttpError {
    /// Status code, echoed in the body.
    #[schema(example = 400)]
    pub code: u16,
    /// Human-readable description of the failure.
    #[schema(example = "no group id provided")]
    pub message: String,
}

/// Error half of every definition handler reply.
pub type ErrorReply = (StatusCode, Json<HttpError>);

/// Map a registry error to its transport status.
///
/// Total over the taxonomy: `BadRequest` is 400, `NotFound` is 404, anything
/// else is 500.
pub fn status_for(err: &RegistryError) -> StatusCode {
    match err {
        RegistryError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
        RegistryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Reply for a request rejected before any port call.
pub fn bad_request(message: impl Into<String>) -> ErrorReply {
    reply_with(StatusCode::BAD_REQUEST, message.into())
}

/// Reply for an error the query port returned.
pub fn reply(err: &RegistryError) -> ErrorReply {
    reply_with(status_for(err), err.to_string())
}

fn reply_with(status: StatusCode, message: String) -> ErrorReply {
    (
        status,
        Json(HttpError {
            code: status.as_u16(),
            message,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let err = RegistryError::bad_request("No group provided");
        assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = RegistryError::not_found("Group \"g1\" not found");
        assert_eq!(status_for(&err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_anything_else_maps_to_500() {
        let err = RegistryError::from(anyhow::anyhow!("boom"));
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_a_wrapped_cause_never_changes_the_status() {
        let cause = anyhow::anyhow!("row missing");
        let err = RegistryError::not_found_with("Group \"g1\" not found", cause);
        assert_eq!(status_for(&err), StatusCode::NOT_FOUND);

        let cause = anyhow::anyhow!("malformed header");
        let err = RegistryError::bad_request_with("No group provided", cause);
        assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_http_error_serialization() {
        let body = HttpError {
            code: 400,
            message: "no group id provided".to_string(),
        };
        let json = serde_json::to_string(&body).expect("Failed to serialize");
        assert_eq!(json, r#"{"code":400,"message":"no group id provided"}"#);
    }

    #[test]
    fn test_reply_echoes_the_status_in_the_body() {
        let (status, Json(body)) = reply(&RegistryError::not_found("Group \"g1\" not found"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, 404);
        assert_eq!(body.message, "Group \"g1\" not found");
    }

    #[test]
    fn test_bad_request_reply_shape() {
        let (status, Json(body)) = bad_request("no workflow id provided");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, 400);
        assert_eq!(body.message, "no workflow id provided");
    }
}
