use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 576;
pub const DEFAULT_GUIDANCE_SCALE: f64 = 7.5;
pub const DEFAULT_NUM_INFERENCE_STEPS: u32 = 4;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[validate(length(min = 1, message = "prompt must not be empty."))]
    pub prompt: String,
    #[serde(default = "default_width")]
    #[validate(range(min = 256, max = 2048, message = "width must be between 256 and 2048."))]
    pub width: u32,
    #[serde(default = "default_height")]
    #[validate(range(min = 256, max = 2048, message = "height must be between 256 and 2048."))]
    pub height: u32,
    #[serde(default = "default_guidance_scale")]
    #[validate(range(
        min = 1.0,
        max = 20.0,
        message = "guidance_scale must be between 1.0 and 20.0."
    ))]
    pub guidance_scale: f64,
    #[serde(default = "default_num_inference_steps")]
    #[validate(range(
        min = 1,
        max = 50,
        message = "num_inference_steps must be between 1 and 50."
    ))]
    pub num_inference_steps: u32,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_guidance_scale() -> f64 {
    DEFAULT_GUIDANCE_SCALE
}

fn default_num_inference_steps() -> u32 {
    DEFAULT_NUM_INFERENCE_STEPS
}
