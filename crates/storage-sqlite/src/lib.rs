//! SQLite storage implementation for StockLive.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `stocklive-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for users, lots and blog posts
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//!
//! ```text
//!          core (domain, traits)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```
//!
//! Reads go through the r2d2 pool; every write is funnelled through the
//! single writer actor in [`db::write_actor`].

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod blog;
pub mod lots;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from stocklive-core for convenience
pub use stocklive_core::errors::{DatabaseError, Error, Result};
