use anyhow::Context;
use clap::Parser;
use portal_gateway::{startup, App, Cli};
use portal_telemetry::TelemetryConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::try_parse()?;

    portal_telemetry::init(
        &TelemetryConfig::builder()
            .format(config.log_format.into())
            .build(),
    )?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        namespace = %config.namespace,
        "starting redirect server"
    );

    let state = startup::build_state(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
