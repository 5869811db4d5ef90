//! Database seeding utilities.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, info};

use super::client::{PgSeedClient, SeedClient};
use crate::config::SeedConfig;
use crate::generators::UserGenerator;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Batch size must be greater than zero")]
    InvalidBatchSize,
}

/// Seeds the users table with generated records.
pub struct Seeder {
    config: SeedConfig,
    generator: UserGenerator,
}

impl Seeder {
    /// Creates a seeder with the given run configuration and a default generator.
    pub fn new(config: SeedConfig) -> Self {
        Self {
            config,
            generator: UserGenerator::new(),
        }
    }

    /// Replaces the user generator.
    pub fn with_generator(mut self, generator: UserGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Runs the full seeding pass against the database.
    ///
    /// Opens one transaction, inserts `row_count` rows in batches, and
    /// commits once at the end. Any failure propagates and nothing is
    /// committed. Returns the number of rows inserted.
    pub async fn run(&self, pool: &PgPool) -> Result<u64, SeedError> {
        let client = PgSeedClient::begin(pool).await?;
        self.seed_users(client).await
    }

    /// Generates and inserts rows through the given client, committing once
    /// after the final batch.
    ///
    /// With `skip_if_populated` set, a non-empty users table short-circuits
    /// the run: nothing is inserted and nothing is committed.
    pub async fn seed_users<C: SeedClient>(&self, mut client: C) -> Result<u64, SeedError> {
        if self.config.batch_size == 0 {
            return Err(SeedError::InvalidBatchSize);
        }

        if self.config.skip_if_populated {
            let existing = client.count_users().await?;
            if existing > 0 {
                info!("Users table already has {} rows, skipping seed", existing);
                return Ok(0);
            }
        }

        let total = self.config.row_count;
        info!("Seeding {} users...", total);

        let mut rng = match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut inserted: u64 = 0;
        let mut batches: u64 = 0;

        while inserted < total {
            let batch_len = (total - inserted).min(self.config.batch_size as u64) as usize;
            let users = self.generator.generate_batch(batch_len, &mut rng);
            client.insert_users(&users).await?;
            inserted += batch_len as u64;
            batches += 1;

            debug!("Inserted batch of {} rows", batch_len);
            if batches % 50 == 0 {
                let percentage = (inserted as f64 / total as f64) * 100.0;
                info!("  Seeded {}/{} users ({:.2}%)", inserted, total, percentage);
            }
        }

        client.commit().await?;
        info!("Seeded {} users", inserted);
        Ok(inserted)
    }
}

/// Returns the current row count of the users table.
pub async fn count_users(pool: &PgPool) -> Result<i64, SeedError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Deletes all rows from the users table.
///
/// **WARNING**: This removes every user row. Use with caution.
pub async fn clear_users(pool: &PgPool) -> Result<(), SeedError> {
    info!("Clearing users table...");
    sqlx::query("DELETE FROM users").execute(pool).await?;
    info!("Users table cleared");
    Ok(())
}
