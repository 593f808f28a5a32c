use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn get_root() -> Json<Value> {
    Json(json!({
        "message": "HuggingFace Image Generator API",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "generate_endpoint": "/generate (POST)",
            "health_endpoint": "/health (GET)",
        },
    }))
}

pub async fn get_health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "hf_token_configured": state.envy.hf_token().is_some(),
    }))
}
