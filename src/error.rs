//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Provider errors
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Provider rejected the request: {0}")]
    ProviderRejected(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    // Tracked-user errors
    #[error("Handle is already tracked: {0}")]
    DuplicateHandle(String),

    #[error("Handle not found on provider: {0}")]
    HandleNotFound(String),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Store errors
    #[error("Store error: {0}")]
    Store(String),

    #[error("Stored data is corrupt: {0}")]
    CorruptStore(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ProviderUnavailable(_) => "PROVIDER_UNAVAILABLE",
            Self::ProviderRejected(_) => "PROVIDER_REJECTED",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::DuplicateHandle(_) => "DUPLICATE_HANDLE",
            Self::HandleNotFound(_) => "HANDLE_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Store(_) => "STORE_ERROR",
            Self::CorruptStore(_) => "CORRUPT_STORE",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ProviderUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::ProviderRejected(_) | Self::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            Self::DuplicateHandle(_) => StatusCode::CONFLICT,
            Self::HandleNotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::CorruptStore(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error came from talking to the provider
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            Self::ProviderUnavailable(_) | Self::ProviderRejected(_) | Self::MalformedResponse(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Store(e) | AppError::CorruptStore(e) => {
                tracing::error!("Store error: {}", e);
                "A storage error occurred".to_string()
            }
            e if e.is_provider_error() => {
                tracing::warn!("Provider error: {}", e);
                e.to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

// Implement From for common error types
impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Store(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Store(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::MalformedResponse(err.to_string())
        } else {
            AppError::ProviderUnavailable(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
