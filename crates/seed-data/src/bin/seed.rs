//! Default seed script - fills the users table with synthetic records
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use seed_data::config::{DatabaseConfig, SeedConfig};
use seed_data::db::Seeder;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| DatabaseConfig::from_env().connection_url());

    // Inserts run serially inside one transaction
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    let mut config = SeedConfig::default();
    if let Ok(rows) = std::env::var("SEED_ROW_COUNT") {
        config.row_count = rows.parse()?;
    }
    if let Ok(batch) = std::env::var("SEED_BATCH_SIZE") {
        config.batch_size = batch.parse()?;
    }

    let inserted = Seeder::new(config).run(&pool).await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Users inserted: {}", inserted);

    Ok(())
}
