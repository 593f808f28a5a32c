use async_trait::async_trait;
use bytes::Bytes;
use imagesize::ImageType;
use reqwest::{header, Client, StatusCode};

use crate::{
    app::models::api_error::ApiError,
    media::{apis::ImageGenerator, errors::MediaApiError},
};

use super::{
    models::input_spec::{InputParameters, InputSpec},
    structs::huggingface_error_response::HuggingFaceErrorResponse,
};

pub struct HuggingFaceGenerator {
    client: Client,
    api_url: String,
    model: String,
    token: String,
}

impl HuggingFaceGenerator {
    pub fn new(client: Client, api_url: &str, model: &str, token: &str) -> Self {
        Self {
            client,
            api_url: api_url.to_string(),
            model: model.to_string(),
            token: token.to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}", self.api_url, self.model)
    }
}

#[async_trait]
impl ImageGenerator for HuggingFaceGenerator {
    async fn generate(
        &self,
        prompt: &str,
        width: u32,
        height: u32,
        guidance_scale: f64,
        num_inference_steps: u32,
    ) -> Result<Bytes, ApiError> {
        let input_spec = InputSpec {
            inputs: prompt,
            parameters: InputParameters {
                width,
                height,
                guidance_scale,
                num_inference_steps,
            },
        };

        tracing::debug!(
            "huggingface request: model={}, width={}, height={}, steps={}",
            self.model,
            width,
            height,
            num_inference_steps
        );

        let result = self
            .client
            .post(self.url())
            .bearer_auth(&self.token)
            .header(header::ACCEPT, mime::IMAGE_PNG.as_ref())
            .json(&input_spec)
            .send()
            .await;

        let res = match result {
            Ok(res) => res,
            Err(e) => {
                tracing::error!("huggingface request failed: {}", e);
                let detail = if e.is_timeout() {
                    "upstream request timed out".to_string()
                } else {
                    e.to_string()
                };
                return Err(MediaApiError::GenerationFailed(detail).value());
            }
        };

        let status = res.status();
        if !status.is_success() {
            let detail = error_detail(status, res.text().await.unwrap_or_default());
            tracing::error!("huggingface returned an error: {}", detail);
            return Err(MediaApiError::GenerationFailed(detail).value());
        }

        let bytes = match res.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("failed to read huggingface response: {}", e);
                return Err(MediaApiError::GenerationFailed(e.to_string()).value());
            }
        };

        verify_image(&bytes)?;

        tracing::debug!("huggingface generation complete, {} bytes", bytes.len());

        Ok(bytes)
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

fn error_detail(status: StatusCode, text: String) -> String {
    let message = match serde_json::from_str::<HuggingFaceErrorResponse>(&text) {
        Ok(response) => response.detail(),
        Err(_) if text.trim().is_empty() => "no response body".to_string(),
        Err(_) => text.trim().to_string(),
    };

    format!("upstream returned {}: {}", status, message)
}

fn verify_image(bytes: &Bytes) -> Result<(), ApiError> {
    if bytes.is_empty() {
        return Err(
            MediaApiError::GenerationFailed("upstream returned an empty body".to_string()).value(),
        );
    }

    match imagesize::image_type(bytes) {
        Ok(ImageType::Png) => Ok(()),
        Ok(other) => {
            tracing::error!("huggingface returned {:?} instead of png", other);
            Err(MediaApiError::GenerationFailed(format!(
                "upstream returned {:?} instead of png",
                other
            ))
            .value())
        }
        Err(e) => {
            tracing::error!("huggingface returned a non-image payload: {:?}", e);
            Err(MediaApiError::GenerationFailed(
                "upstream returned a malformed image payload".to_string(),
            )
            .value())
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::app::util::reqwest::build_client;

    /// 1x1 transparent PNG.
    pub(crate) const PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    const MODEL: &str = "black-forest-labs/FLUX.1-schnell";

    fn generator(api_url: &str) -> HuggingFaceGenerator {
        let client = build_client(Duration::from_secs(5)).unwrap();
        HuggingFaceGenerator::new(client, api_url, MODEL, "hf_test")
    }

    async fn generate(generator: &HuggingFaceGenerator) -> Result<Bytes, ApiError> {
        generator.generate("a red cube", 1024, 576, 7.5, 4).await
    }

    #[tokio::test]
    async fn sends_prompt_parameters_and_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/models/{}", MODEL)))
            .and(header("authorization", "Bearer hf_test"))
            .and(header("accept", "image/png"))
            .and(body_json(json!({
                "inputs": "a red cube",
                "parameters": {
                    "width": 1024,
                    "height": 576,
                    "guidance_scale": 7.5,
                    "num_inference_steps": 4
                }
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "image/png")
                    .set_body_bytes(PNG),
            )
            .expect(1)
            .mount(&server)
            .await;

        let bytes = generate(&generator(&server.uri())).await.unwrap();

        assert_eq!(bytes.as_ref(), PNG);
    }

    #[tokio::test]
    async fn error_status_carries_upstream_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "error": "Model is currently loading",
                "estimated_time": 20.0
            })))
            .mount(&server)
            .await;

        let err = generate(&generator(&server.uri())).await.unwrap_err();

        assert_eq!(err.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.reason, "generation_failed");
        assert!(err.message.starts_with("Image generation failed: "));
        assert!(err.message.contains("503"));
        assert!(err.message.contains("Model is currently loading"));
    }

    #[tokio::test]
    async fn error_status_with_plain_text_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
            .mount(&server)
            .await;

        let err = generate(&generator(&server.uri())).await.unwrap_err();

        assert!(err.message.contains("401"));
        assert!(err.message.contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn non_image_payload_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .mount(&server)
            .await;

        let err = generate(&generator(&server.uri())).await.unwrap_err();

        assert_eq!(err.reason, "generation_failed");
        assert!(err.message.contains("malformed"));
    }

    #[tokio::test]
    async fn jpeg_payload_is_rejected() {
        let server = MockServer::start().await;

        let jpeg: &[u8] = &[
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00,
            0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x01, 0x00,
            0x01, 0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01, 0xFF, 0xD9,
        ];

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "image/jpeg")
                    .set_body_bytes(jpeg),
            )
            .mount(&server)
            .await;

        let err = generate(&generator(&server.uri())).await.unwrap_err();

        assert_eq!(err.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.reason, "generation_failed");
        assert!(err.message.contains("instead of png"));
    }

    #[tokio::test]
    async fn empty_payload_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = generate(&generator(&server.uri())).await.unwrap_err();

        assert!(err.message.contains("empty body"));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_generation_failure() {
        let err = generate(&generator("http://127.0.0.1:1")).await.unwrap_err();

        assert_eq!(err.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.reason, "generation_failed");
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(PNG)
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = build_client(Duration::from_millis(200)).unwrap();
        let generator = HuggingFaceGenerator::new(client, &server.uri(), MODEL, "hf_test");

        let err = generate(&generator).await.unwrap_err();

        assert!(err.message.contains("timed out"));
    }
}
