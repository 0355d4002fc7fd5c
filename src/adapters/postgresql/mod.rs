//! PostgreSQL write backend
//!
//! Writes through a direct database connection. Every run is a single
//! transaction, so a failed run leaves the place table untouched.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::{PostgresSession, PostgresStore};
pub use client::PostgresClient;
