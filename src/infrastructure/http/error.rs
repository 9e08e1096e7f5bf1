//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

/// 解析 JSON 请求体，失败时按统一错误格式返回
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 业务错误统一返回 200，错误码放在 errno 中
        let response = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = errno::BAD_REQUEST, error = %msg, "Bad request");
                ErrorResponse::new(errno::BAD_REQUEST, msg)
            }
        };

        (StatusCode::OK, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::dto::IntentRequest;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn envelope(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_uses_envelope() {
        let error: ApiError = ApplicationError::validation("Unknown intent: skip").into();
        let (status, body) = envelope(error).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["errno"], errno::BAD_REQUEST);
        assert_eq!(body["error"], "Unknown intent: skip");
        assert!(body["data"].is_null());
    }

    #[test]
    fn test_parse_json_body() {
        let req: IntentRequest = parse_json_body(br#"{"intent":"play"}"#).unwrap();
        assert_eq!(req.intent, "play");

        let err = parse_json_body::<IntentRequest>(b"{oops").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(msg) if msg.starts_with("Invalid request body")));
    }
}
