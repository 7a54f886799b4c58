use moviedex_api::{
    api::{create_router, AppState},
    config::Config,
    services::Dataset,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(config.app_env)?;

    // Load the movie collection once; it is never modified afterwards
    let dataset = Dataset::load(config.movies_path.as_deref())?;
    let state = AppState::new(dataset, config.app_env);

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind_addr(), e))?;
    tracing::info!(
        address = %config.bind_addr(),
        environment = ?config.app_env,
        "Server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
