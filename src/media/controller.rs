use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{dtos::generate_image_dto::GenerateImageDto, service};

pub async fn generate_image(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Response, ApiError> {
    dto.validate()?;

    let bytes = service::generate_image(&dto, &state).await?;

    Ok((
        [
            (CONTENT_TYPE, mime::IMAGE_PNG.as_ref()),
            (CONTENT_DISPOSITION, "inline; filename=generated_image.png"),
        ],
        bytes,
    )
        .into_response())
}
