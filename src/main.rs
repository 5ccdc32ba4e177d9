//! Gateway binary: load config, wire the Gemini generator, serve.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use prompt_relay::adapters::ai::{GeminiConfig, GeminiGenerator};
use prompt_relay::adapters::http::{gateway_app, AppState};
use prompt_relay::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    // RUST_LOG wins over the configured filter when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = config.validate() {
        tracing::error!(error = %err, "invalid configuration");
        return ExitCode::FAILURE;
    }

    let generator = GeminiGenerator::new(GeminiConfig::from_app_config(&config.ai));
    let state = AppState::new(Arc::new(generator));
    let app = gateway_app(state, &config.server);

    let addr = config.server.socket_addr();
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        model = %config.ai.model,
        "starting gateway"
    );

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, error = %err, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
