pub mod huggingface;

use async_trait::async_trait;
use bytes::Bytes;

use crate::app::models::api_error::ApiError;

/// A remote text-to-image backend.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Run one synthesis and return the encoded image.
    async fn generate(
        &self,
        prompt: &str,
        width: u32,
        height: u32,
        guidance_scale: f64,
        num_inference_steps: u32,
    ) -> Result<Bytes, ApiError>;

    /// Name used in logs.
    fn name(&self) -> &str;
}
