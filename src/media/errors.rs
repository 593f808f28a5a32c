use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum MediaApiError {
    GenerationFailed(String),
}

impl MediaApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::GenerationFailed(detail) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                reason: "generation_failed",
                message: format!("Image generation failed: {}", detail),
                details: None,
            },
        }
    }
}
