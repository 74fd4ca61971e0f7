use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Lesson {0} not found")]
    LessonNotFound(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(&'static str),

    #[error("Username {0} is already taken")]
    UsernameTaken(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::LessonNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidUsername { .. } => StatusCode::BAD_REQUEST,
            AppError::UsernameTaken { .. } => StatusCode::CONFLICT,
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status.is_server_error() {
            error!("{self}");
            "Internal error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
