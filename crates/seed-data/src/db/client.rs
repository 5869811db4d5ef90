//! Insert client abstraction over the target database.

use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};

use super::seeder::SeedError;
use crate::generators::GeneratedUser;

/// Postgres caps a single statement at 65,535 bind parameters.
const PG_BIND_LIMIT: usize = 65_535;

/// Bind parameters per user row.
const USER_COLUMNS: usize = 5;

/// Largest number of rows one multi-row insert statement can carry.
const MAX_ROWS_PER_INSERT: usize = PG_BIND_LIMIT / USER_COLUMNS;

/// A sink for generated user rows.
///
/// The production implementation is [`PgSeedClient`]; tests substitute an
/// in-memory fake. Rows become visible to other connections only after
/// [`commit`](SeedClient::commit).
#[allow(async_fn_in_trait)]
pub trait SeedClient {
    /// Returns the number of rows already in the users table.
    async fn count_users(&mut self) -> Result<i64, SeedError>;

    /// Inserts a batch of users.
    async fn insert_users(&mut self, users: &[GeneratedUser]) -> Result<(), SeedError>;

    /// Commits everything inserted so far, consuming the client.
    async fn commit(self) -> Result<(), SeedError>;
}

/// Seed client backed by a single Postgres transaction.
///
/// Uses one connection serially; if the run aborts the transaction is never
/// committed and the database rolls back on disconnect.
pub struct PgSeedClient {
    tx: Transaction<'static, Postgres>,
}

impl PgSeedClient {
    /// Opens a transaction on the given pool.
    pub async fn begin(pool: &PgPool) -> Result<Self, SeedError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }
}

impl SeedClient for PgSeedClient {
    async fn count_users(&mut self) -> Result<i64, SeedError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(count)
    }

    async fn insert_users(&mut self, users: &[GeneratedUser]) -> Result<(), SeedError> {
        // Batches larger than the bind limit allows go out as several
        // statements within the same transaction
        for chunk in users.chunks(MAX_ROWS_PER_INSERT) {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO users (name, email, country_code, subscription_tier, lifetime_value) ",
            );
            builder.push_values(chunk, |mut b, user| {
                b.push_bind(&user.name)
                    .push_bind(&user.email)
                    .push_bind(user.country_code.as_str())
                    .push_bind(user.subscription_tier.as_str())
                    .push_bind(user.lifetime_value);
            });
            builder.build().execute(&mut *self.tx).await?;
        }

        Ok(())
    }

    async fn commit(self) -> Result<(), SeedError> {
        self.tx.commit().await?;
        Ok(())
    }
}
