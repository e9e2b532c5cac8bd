//! APIエラー型
//!
//! ハンドラーの失敗をHTTPステータスと `{"error": ...}` 形式のJSONに変換する

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pokemon_collection_common::{error::ServerError, protocol::ErrorResponse};
use thiserror::Error;

/// ハンドラー用Result型
pub type ApiResult<T> = Result<T, ApiError>;

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 入力不正 (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// 認証情報なし (401)
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// 認証情報が無効 (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// リソースなし、または所有者以外 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 重複 (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// サーバー内部エラー (500)、メッセージはログ用
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTPステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// クライアントに返すメッセージ
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(message)
            | ApiError::Unauthenticated(message)
            | ApiError::Forbidden(message)
            | ApiError::NotFound(message)
            | ApiError::Conflict(message) => message.clone(),
            ApiError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<ServerError> for ApiError {
    fn from(error: ServerError) -> Self {
        match error {
            ServerError::Validation(message) => ApiError::Validation(message),
            ServerError::DuplicateUsername(_) => {
                ApiError::Conflict("Username already exists".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let ApiError::Internal(ref message) = self {
            tracing::error!(status = %status, "Request failed: {}", message);
        } else {
            tracing::debug!(status = %status, "Request rejected: {}", self);
        }

        let body = ErrorResponse {
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}
