//! Seed script for development — populates the users and orders tables.
//!
//! Usage: `cargo run --bin seed [orders.csv]`
//!
//! Without a file the built-in sample dataset is loaded. The CSV header is
//! `user_id,country,amount,order_date`. Requires `DATABASE_URL` (reads .env).

use clap::Parser;
use growth_analytics::config::{AppConfig, SeedArgs};
use growth_analytics::db;
use growth_analytics::services::seed;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = SeedArgs::parse();
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "growth_analytics=info".into()),
        )
        .init();

    let config = AppConfig::from_env();
    let pool = db::create_pool(&config.database_url, 5).await?;

    // Run migrations first
    db::migrate(&pool).await?;

    println!("=== Growth Analytics Seed Script ===");

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(&pool)
        .await?;
    if existing > 0 {
        println!("[info] {existing} orders already present, appending");
    }

    let records = match &args.csv {
        Some(path) => {
            let records = seed::read_csv(path)?;
            println!("[done] Parsed {} orders from {}", records.len(), path.display());
            records
        }
        None => seed::sample_orders(),
    };

    let summary = seed::load(&pool, &records).await?;

    println!(
        "\n=== Seed complete: {} users, {} orders ===",
        summary.users, summary.orders
    );

    Ok(())
}
