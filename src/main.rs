use focus_dashboard::{load_seed, router, AppState, Config};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let seed = load_seed(config.seed_path.as_deref()).await;
    info!(
        weekly_goal = seed.weekly_goal,
        total_minutes = seed.total_minutes(),
        "session seed ready"
    );

    info!(
        ttl_secs = config.session_limits.ttl.as_secs(),
        max_sessions = config.session_limits.max_sessions,
        "session limits"
    );

    let app = router(AppState::with_limits(seed, config.session_limits));
    let addr = config.socket_addr();

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
