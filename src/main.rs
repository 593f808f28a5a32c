use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::{
    app::{env::Envy, util::reqwest::build_client},
    media::apis::{huggingface::service::HuggingFaceGenerator, ImageGenerator},
};

mod app;
mod media;

const BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub generator: Option<Arc<dyn ImageGenerator>>,
}

#[tokio::main]
async fn main() {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();

    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let generator: Option<Arc<dyn ImageGenerator>> = match envy.hf_token() {
        Some(token) => {
            let client = match build_client(envy.hf_timeout()) {
                Ok(client) => client,
                Err(e) => panic!("failed to build http client: {:#?}", e),
            };

            tracing::info!(
                "using {} at {} (timeout {:?})",
                envy.hf_model(),
                envy.hf_api_url(),
                envy.hf_timeout()
            );

            Some(Arc::new(HuggingFaceGenerator::new(
                client,
                envy.hf_api_url(),
                envy.hf_model(),
                token,
            )))
        }
        None => {
            tracing::warn!("HF_TOKEN not set, /generate will fail until it is configured");
            None
        }
    };

    let port = envy.port();
    let state = AppState {
        envy: Arc::new(envy),
        generator,
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("server error: {}", e);
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/health", get(app::controller::get_health))
        .route("/generate", post(media::controller::generate_image))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(DefaultBodyLimit::max(BODY_LIMIT)),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
