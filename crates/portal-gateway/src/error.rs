use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portal_redirector::RedirectorError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Redirector(#[from] RedirectorError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Redirector(source) => {
                error!(error = %source, "redirect lookup failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error\n").into_response()
            }
        }
    }
}
