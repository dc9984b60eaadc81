//! Dashboard UI server.
//!
//! Usage: `cargo run --bin dashboard`
//!
//! Reads `API_BASE_URL`, `DASHBOARD_HOST` and `DASHBOARD_PORT` (reads .env).

use std::net::SocketAddr;

use growth_analytics::config::DashboardConfig;
use growth_analytics::ui::{self, client::ApiClient};
use mimalloc::MiMalloc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "growth_analytics=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = DashboardConfig::from_env();
    let client = ApiClient::new(&config.api_base_url);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(host = %addr, api = %client.base_url(), "Starting dashboard server");
    axum::serve(listener, ui::router(client)).await?;

    Ok(())
}
