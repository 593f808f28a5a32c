use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HF_MODEL: &str = "black-forest-labs/FLUX.1-schnell";
pub const DEFAULT_HF_API_URL: &str = "https://router.huggingface.co/hf-inference";
pub const DEFAULT_HF_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub hf_token: Option<String>,
    pub hf_model: Option<String>,
    pub hf_api_url: Option<String>,
    pub hf_timeout_secs: Option<u64>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// The upstream credential, treating a blank value as unset.
    pub fn hf_token(&self) -> Option<&str> {
        self.hf_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn hf_model(&self) -> &str {
        self.hf_model.as_deref().unwrap_or(DEFAULT_HF_MODEL)
    }

    pub fn hf_api_url(&self) -> &str {
        self.hf_api_url
            .as_deref()
            .unwrap_or(DEFAULT_HF_API_URL)
            .trim_end_matches('/')
    }

    pub fn hf_timeout(&self) -> Duration {
        Duration::from_secs(self.hf_timeout_secs.unwrap_or(DEFAULT_HF_TIMEOUT_SECS))
    }
}
