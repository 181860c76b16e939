//! Webhook error type with Axum `IntoResponse` support.
//!
//! Business failures (missing slots, no matching reservation, storage
//! faults) are not errors at this layer — they become French messages
//! in a 200 response. Only protocol-level problems reach this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The dialogue engine asked for an action this server does not
    /// implement.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UnknownAction(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Convenience alias.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn unknown_action_is_a_bad_request() {
        let err = ApiError::UnknownAction("action_fly_to_the_moon".into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], 400);
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .contains("action_fly_to_the_moon")
        );
    }
}
