//! Error handling for the Fertilizer Advisory Service
//!
//! Domain errors surface as HTTP 400 with a `{"detail": ...}` body;
//! everything else is a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// No reference row for the requested soil/crop pair
    #[error("No data for this soil-crop combination.")]
    NoData,

    /// External weather service failure or malformed response; carries the
    /// upstream message
    #[error("{0}")]
    WeatherUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NoData | AppError::WeatherUnavailable(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Configuration(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let detail = self.to_string();
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
