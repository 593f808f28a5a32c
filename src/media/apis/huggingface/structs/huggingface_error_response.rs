use serde::Deserialize;
use serde_json::Value;

/// Body returned by the inference API on failure, e.g.
/// `{"error": "Model is currently loading", "estimated_time": 20.0}`.
#[derive(Debug, Deserialize)]
pub struct HuggingFaceErrorResponse {
    pub error: Value,
    pub estimated_time: Option<f64>,
}

impl HuggingFaceErrorResponse {
    pub fn detail(&self) -> String {
        let error = match &self.error {
            Value::String(error) => error.to_string(),
            Value::Array(errors) => errors
                .iter()
                .map(|e| match e {
                    Value::String(e) => e.to_string(),
                    other => other.to_string(),
                })
                .collect::<Vec<String>>()
                .join("; "),
            other => other.to_string(),
        };

        match self.estimated_time {
            Some(seconds) => format!("{} (estimated time: {:.0}s)", error, seconds),
            None => error,
        }
    }
}
