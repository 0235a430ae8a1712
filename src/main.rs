use anyhow::Result;

use coffee_support::config::Config;
use coffee_support::handlers::router;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::load();
    let bind = config.server.bind.clone();

    let state = coffee_support::build_state(config).await?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "Starting coffee-support server");
    axum::serve(listener, app).await?;
    Ok(())
}
