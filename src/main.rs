//! Screen Scout binary - composition root.
//!
//! 1. Load and validate configuration from environment variables
//! 2. Initialize tracing
//! 3. Build the HTTP content provider and generative backend
//! 4. Wire the chat orchestrator
//! 5. Start the axum server

use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use screen_scout::adapters::http::chat::{handle_panic, routes, timeout_response, ChatAppState};
use screen_scout::adapters::{
    CatalogHttpConfig, GenerativeHttpConfig, HttpContentProvider, HttpGenerativeBackend,
};
use screen_scout::application::{ChatOrchestrator, DEFAULT_PERSONA};
use screen_scout::config::AppConfig;
use screen_scout::domain::chat::ImageUrlBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .init();

    config.validate()?;
    tracing::info!("Starting Screen Scout v{}", env!("CARGO_PKG_VERSION"));

    // Content provider.
    let provider_key = config
        .provider
        .api_key
        .clone()
        .ok_or("provider API key missing")?;
    let provider = HttpContentProvider::new(
        CatalogHttpConfig::new(provider_key)
            .with_base_url(config.provider.base_url.clone())
            .with_timeout(config.provider.timeout()),
    );

    // Generative backend.
    let backend_key = config
        .generative
        .api_key
        .clone()
        .ok_or("generative API key missing")?;
    let backend = HttpGenerativeBackend::new(
        GenerativeHttpConfig::new(backend_key)
            .with_base_url(config.generative.base_url.clone())
            .with_model(config.generative.model.clone())
            .with_sampling(
                config.generative.temperature,
                config.generative.top_k,
                config.generative.top_p,
            )
            .with_max_output_tokens(config.generative.max_output_tokens)
            .with_timeout(config.generative.timeout()),
    );

    // Orchestrator.
    let images = ImageUrlBuilder::new(
        config.provider.image_base_url.clone(),
        config.provider.placeholder_path.clone(),
    );
    let persona = config
        .generative
        .persona
        .clone()
        .unwrap_or_else(|| DEFAULT_PERSONA.to_string());
    let orchestrator = Arc::new(ChatOrchestrator::new(
        Arc::new(provider),
        Arc::new(backend),
        images,
        persona,
    ));

    // Router and middleware.
    let cors = build_cors(&config);
    let router = routes()
        .with_state(ChatAppState::new(orchestrator))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        // Outside the timeout layer: rewrites its bare 408 into a chat body.
        .layer(axum::middleware::map_response(timeout_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Chat server listening");

    axum::serve(listener, router).await?;

    Ok(())
}

fn build_cors(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    }
}
