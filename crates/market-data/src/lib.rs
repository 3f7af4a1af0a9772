//! StockLive Market Data Crate
//!
//! Provider-agnostic access to daily price history and issuer profiles.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |   Core Domain    | --> |  MarketDataProvider  |  (trait)
//! +------------------+     +----------------------+
//!                                     |
//!                                     v
//!                          +----------------------+
//!                          |    YahooProvider     |
//!                          +----------------------+
//!                                     |
//!                                     v
//!                          +----------------------+
//!                          |  Quote / AssetProfile |
//!                          +----------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Quote`] - Daily close
//! - [`AssetProfile`] - Provider-sourced profile data (name, sector, market cap)
//! - [`MarketDataError`] - Provider failures, classified by [`RetryClass`]

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{MarketDataError, RetryClass};
pub use models::{AssetProfile, Quote};
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
