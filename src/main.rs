use std::net::SocketAddr;

use growth_analytics::config::AppConfig;
use growth_analytics::{db, routes, AppState};
use mimalloc::MiMalloc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// M-MIMALLOC-APP: Use mimalloc as global allocator for improved performance.
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

    let config = AppConfig::from_env();

    let pool = db::create_lazy_pool(
        &config.database_url,
        config.database_max_connections,
        db::DEFAULT_ACQUIRE_TIMEOUT,
    )?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = routes::router(AppState { db: pool });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(host = %addr, "Starting growth analytics API server");
    axum::serve(listener, app).await?;

    Ok(())
}
