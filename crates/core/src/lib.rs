//! StockLive Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the StockLive backend: lot
//! valuation, users, content, chat and contact handling. It is
//! database-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate; market prices are reached through the
//! `market-data` crate's provider trait.

pub mod chat;
pub mod constants;
pub mod contact;
pub mod content;
pub mod errors;
pub mod lots;
pub mod portfolio;
pub mod prices;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
