use async_trait::async_trait;

use crate::errors::Result;
use crate::lots::Lot;
use crate::portfolio::portfolio_model::PortfolioResult;

/// Trait for portfolio valuation
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Values every lot owned by `user_id`.
    ///
    /// Only a failure to load the lots fails the request.
    async fn get_portfolio(&self, user_id: &str) -> Result<PortfolioResult>;

    /// Values an in-memory set of lots. Tickers that cannot be valued are
    /// logged and left out.
    async fn value_lots(&self, lots: Vec<Lot>) -> PortfolioResult;
}
