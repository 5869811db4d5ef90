//! Entity generators for synthetic data.
//!
//! - [`UserGenerator`]: Generate randomized user records ready for insertion

pub mod user;

pub use user::{GeneratedUser, NameStyle, UserGenConfig, UserGenerator};
