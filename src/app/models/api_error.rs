use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use validator::ValidationErrors;

/// Error returned by every handler. Serialized as
/// `{"error": reason, "message": message, "details": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub reason: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.reason,
            "message": self.message,
        });

        if let Some(details) = self.details {
            body["details"] = details;
        }

        (self.code, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // missing or mistyped fields are data errors (422), broken json is 400
        let message = rejection.body_text();
        let details = match &rejection {
            JsonRejection::JsonDataError(_) => rejected_field(&message).map(|(field, reason)| {
                let mut fields = Map::new();
                fields.insert(field, Value::Array(vec![Value::String(reason)]));
                Value::Object(fields)
            }),
            _ => None,
        };

        Self {
            code: rejection.status(),
            reason: "validation_error",
            message,
            details,
        }
    }
}

/// Field named by a json data error, with the serde reason. Handles
/// "missing field `prompt` at ..." and "width: invalid type: ..." forms.
fn rejected_field(text: &str) -> Option<(String, String)> {
    let reason = match text.split_once("target type: ") {
        Some((_, reason)) => reason,
        None => text,
    };

    if let Some((_, rest)) = reason.split_once("missing field `") {
        let (field, _) = rest.split_once('`')?;
        return Some((field.to_string(), reason.to_string()));
    }

    let (path, detail) = reason.split_once(": ")?;
    if path.is_empty() || path == "." || path.contains(char::is_whitespace) {
        return None;
    }

    Some((path.to_string(), detail.to_string()))
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Map::new();

        for (field, errors) in errors.field_errors() {
            let messages = errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => Value::String(message.to_string()),
                    None => Value::String(e.code.to_string()),
                })
                .collect();

            fields.insert(field.to_string(), Value::Array(messages));
        }

        let message = format!(
            "Invalid value for: {}.",
            fields
                .keys()
                .map(|name| name.as_str())
                .collect::<Vec<&str>>()
                .join(", ")
        );

        Self {
            code: StatusCode::UNPROCESSABLE_ENTITY,
            reason: "validation_error",
            message,
            details: Some(Value::Object(fields)),
        }
    }
}
