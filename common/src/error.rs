//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// UUID parse error
    #[error("UUID parse error: {0}")]
    UuidParse(#[from] uuid::Error),
}

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Username already taken
    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    /// Password hash error
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// JWT error
    #[error("JWT error: {0}")]
    Jwt(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport error
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Non-success response
    #[error("Request failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Operation requires a token obtained by login
    #[error("Not logged in")]
    NotLoggedIn,
}

/// Result type alias (Server)
pub type ServerResult<T> = Result<T, ServerError>;

/// Result type alias (Client)
pub type ClientResult<T> = Result<T, ClientError>;
