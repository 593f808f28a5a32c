use bytes::Bytes;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    AppState,
};

use super::dtos::generate_image_dto::GenerateImageDto;

pub async fn generate_image(dto: &GenerateImageDto, state: &AppState) -> Result<Bytes, ApiError> {
    let (Some(_), Some(generator)) = (state.envy.hf_token(), &state.generator) else {
        tracing::error!("generate_image called without HF_TOKEN configured");
        return Err(DefaultApiError::MissingCredential.value());
    };

    tracing::info!(
        "generating {}x{} image with {} ({} steps, guidance {})",
        dto.width,
        dto.height,
        generator.name(),
        dto.num_inference_steps,
        dto.guidance_scale
    );

    generator
        .generate(
            &dto.prompt,
            dto.width,
            dto.height,
            dto.guidance_scale,
            dto.num_inference_steps,
        )
        .await
}
