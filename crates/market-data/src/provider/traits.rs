//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::MarketDataError;
use crate::models::{AssetProfile, Quote};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
/// Implementations must be safe for concurrent use: one provider instance is
/// shared by every in-flight request.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stocklive_market_data::provider::MarketDataProvider;
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement get_historical_quotes and get_profile
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used in log messages.
    fn id(&self) -> &'static str;

    /// Fetch daily historical quotes for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Provider symbol (e.g., "AAPL")
    /// * `start` - Start of the date range (inclusive)
    /// * `end` - End of the date range (inclusive)
    ///
    /// # Returns
    ///
    /// Quotes ordered by timestamp ascending. An unknown or delisted symbol
    /// may yield either an error or an empty vector; callers must treat both
    /// as "no price available".
    async fn get_historical_quotes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, MarketDataError>;

    /// Fetch issuer profile information.
    ///
    /// Fields the provider cannot supply stay `None`.
    async fn get_profile(&self, symbol: &str) -> Result<AssetProfile, MarketDataError>;
}
