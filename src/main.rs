//! Achievements Admin Console
//!
//! Main application entry point

use anyhow::Context;
use tracing::info;

use achievements_admin::{config::Settings, handlers, utils::logging, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging; the guard flushes file logs on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", achievements_admin::info());
    info!(
        api = %settings.api.base_url,
        environment = %settings.app.environment,
        "Achievements API configured"
    );

    let address = settings.bind_address();
    let state = AppState::new(settings)?;
    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    info!("Admin console listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Admin console has been shut down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
