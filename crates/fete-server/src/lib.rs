//! Fete - AI Party Planning Service
//!
//! A thin HTTP layer over a director that fans a party request out to three
//! specialist prompts (food & drink, theme & decoration, activity &
//! entertainment) and merges their drafts into one comprehensive plan.

pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::Router;
use fete_agents::{ClaudeCli, Director, GeneratorConfig, PromptSpecialist, Specialist};
use fete_models::{FeteConfig, ServerConfig};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::routes::{api_routes, AppState};

/// Build a Director from configuration, with one generator per specialist
/// plus the director's own merge generator.
pub fn build_director(config: &FeteConfig) -> Director {
    let specialists: Vec<Arc<dyn Specialist>> = config
        .agents
        .specialists
        .iter()
        .filter(|s| s.enabled)
        .map(|s| {
            let model = s
                .model
                .clone()
                .unwrap_or_else(|| config.agents.specialist_model.clone());
            let generator = Arc::new(ClaudeCli::new(GeneratorConfig {
                model,
                timeout: Duration::from_secs(config.agents.specialist_timeout_seconds),
            }));
            Arc::new(PromptSpecialist::new(
                s.name.clone(),
                s.domain.clone(),
                generator,
            )) as Arc<dyn Specialist>
        })
        .collect();

    let merge_generator = Arc::new(ClaudeCli::new(GeneratorConfig {
        model: config.agents.director_model.clone(),
        timeout: Duration::from_secs(config.agents.total_timeout_seconds),
    }));

    Director::new(specialists, merge_generator)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

/// Assemble the application router.
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    api_routes()
        .with_state(state)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until shutdown.
pub async fn run(config: FeteConfig) -> Result<()> {
    if !fete_agents::check_cli_available().await {
        warn!("claude CLI not found on PATH; plan requests will fail");
    }

    let director = Arc::new(build_director(&config));
    info!(
        specialists = director.specialist_count(),
        "Director initialized"
    );

    let state = Arc::new(AppState { director });
    let app = build_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;
    info!("Listening on http://{}", config.server.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
