use axum::Json;
use axum_macros::FromRequest;

use super::api_error::ApiError;

/// `Json` body extractor for request dtos. A body that does not
/// deserialize is rejected as a `validation_error` `ApiError`, with
/// the failing field in `details` when serde names one.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);
