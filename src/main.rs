use tracing_subscriber::EnvFilter;

use pos_cart_api::build_router;
use pos_cart_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
