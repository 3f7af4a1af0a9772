use async_trait::async_trait;

use crate::errors::{PriceSourceError, Result};
use crate::prices::prices_model::{IssuerInfo, PricePoint, PriceWindow, StockOverview};

/// Read-only access to market prices.
///
/// Implementations hold no per-request state and may be shared freely
/// between concurrent valuations.
#[async_trait]
pub trait PriceSourceTrait: Send + Sync {
    /// Daily closes for `ticker` within `window`, oldest first.
    ///
    /// An unknown or delisted ticker may yield an empty sequence; callers
    /// treat that the same as a failure.
    async fn fetch_history(
        &self,
        ticker: &str,
        window: PriceWindow,
    ) -> std::result::Result<Vec<PricePoint>, PriceSourceError>;

    /// Best-effort issuer metadata. Never fails; unknown fields are `None`.
    async fn fetch_issuer_info(&self, ticker: &str) -> IssuerInfo;
}

/// Trait for the single-stock lookup
#[async_trait]
pub trait StockLookupServiceTrait: Send + Sync {
    async fn lookup(&self, symbol: &str) -> Result<StockOverview>;
}
