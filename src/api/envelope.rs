//! 统一响应格式
//!
//! 成功：`{success: true, ...}`
//! 失败：`{success: false, error: <code>, message: <text>}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::error::AppError;

/// 失败响应
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("❌ {}", self);
        } else {
            warn!("⚠️ {} → {}", self, status.as_u16());
        }

        ErrorEnvelope::new(status, self.public_message()).into_response()
    }
}

/// 成功响应：在对象中补上 `success: true`
pub fn success(mut body: Value) -> Json<Value> {
    if let Some(map) = body.as_object_mut() {
        map.insert("success".to_string(), Value::Bool(true));
    }
    Json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_adds_flag() {
        let Json(body) = success(json!({"total_questions": 3}));
        assert_eq!(body, json!({"success": true, "total_questions": 3}));
    }

    #[test]
    fn test_error_envelope_status() {
        let response = AppError::not_found("x").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::unprocessable("x").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = AppError::bad_request("x").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
