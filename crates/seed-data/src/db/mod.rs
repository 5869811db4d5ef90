//! Database integration for seeding synthetic users.
//!
//! The [`Seeder`] drives generation and insertion through a [`SeedClient`],
//! so tests can substitute a fake client for the real Postgres transaction.

mod client;
mod seeder;

pub use client::{PgSeedClient, SeedClient};
pub use seeder::{SeedError, Seeder, clear_users, count_users};
