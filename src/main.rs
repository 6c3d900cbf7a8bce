use anyhow::Context;
use employee_hal::lifecycle::shutdown_signal;
use employee_hal::{AppConfig, Application};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting employee service...");

    let app = Application::bootstrap(&config)
        .await
        .context("Failed to initialize application")?;

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app.router())
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Initiating graceful shutdown...");
        })
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
