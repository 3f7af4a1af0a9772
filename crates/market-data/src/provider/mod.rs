//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Yahoo Finance implementation
//!
//! The rest of the system only sees the trait, so tests substitute
//! in-memory providers and new sources can be added without touching the
//! portfolio code.

mod traits;

pub mod yahoo;

pub use traits::MarketDataProvider;
