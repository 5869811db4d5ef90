//! Synthetic user data generation for the exports service.
//!
//! This crate provides tools for generating randomized user records and bulk-loading
//! them into the `users` table to support load testing and demo environments.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let pool = PgPoolOptions::new()
//!     .max_connections(1)
//!     .connect(&DatabaseConfig::from_env().connection_url())
//!     .await?;
//!
//! let config = SeedConfig {
//!     row_count: 100_000,
//!     ..SeedConfig::default()
//! };
//! let inserted = Seeder::new(config).run(&pool).await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;
pub mod models;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DatabaseConfig, SeedConfig};
    pub use crate::db::{SeedClient, SeedError, Seeder};
    pub use crate::generators::{GeneratedUser, UserGenConfig, UserGenerator};
    pub use crate::models::{CountryCode, SubscriptionTier};
}
