use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    MissingCredential,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingCredential => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                reason: "configuration_error",
                message: "HF_TOKEN environment variable not set".to_string(),
                details: None,
            },
        }
    }
}
