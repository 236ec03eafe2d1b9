use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Prompt is too long")]
    PromptTooLong,

    #[error("OPENAI_API_KEY is not configured")]
    MissingCredential,

    #[error("Image provider failed: {0}")]
    Provider(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) | AppError::PromptTooLong => StatusCode::BAD_REQUEST,
            AppError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message returned to the caller. Provider details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidBody(_) => "Invalid request body",
            AppError::PromptTooLong => "Prompt is too long",
            AppError::MissingCredential => "OpenAI API key is not configured",
            AppError::Provider(_) => "Failed to generate image",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.public_message() }))).into_response()
    }
}

pub fn format_error(message: &str, error: impl std::fmt::Display) -> AppError {
    let error_message = format!("{}: {}", message, error);
    error!("Error occurred: {}", error_message);
    AppError::Provider(error_message)
}
