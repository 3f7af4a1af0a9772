use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::constants::{DEFAULT_PORTFOLIO_CONCURRENCY, PORTFOLIO_HISTORY_MONTHS};
use crate::errors::Result;
use crate::lots::{Lot, LotRepositoryTrait};
use crate::portfolio::holding_builder::HoldingBuilder;
use crate::portfolio::holdings_model::{group_lots, Holding};
use crate::portfolio::portfolio_model::{PortfolioResult, PortfolioSummary};
use crate::portfolio::portfolio_traits::PortfolioServiceTrait;
use crate::prices::{PriceSourceTrait, PriceWindow};
use crate::utils::decimal_utils::round_money;

/// Rolls per-ticker holdings up into a portfolio.
pub struct PortfolioService {
    lot_repository: Arc<dyn LotRepositoryTrait>,
    builder: HoldingBuilder,
    concurrency: usize,
}

impl PortfolioService {
    pub fn new(
        lot_repository: Arc<dyn LotRepositoryTrait>,
        price_source: Arc<dyn PriceSourceTrait>,
    ) -> Self {
        Self {
            lot_repository,
            builder: HoldingBuilder::new(price_source),
            concurrency: DEFAULT_PORTFOLIO_CONCURRENCY,
        }
    }

    /// Maximum number of holdings valued at the same time. Clamped to 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    fn summarize(holdings: &[Holding]) -> PortfolioSummary {
        let total_invested: Decimal = holdings.iter().map(|h| h.invested).sum();
        let total_current_value: Decimal = holdings.iter().map(|h| h.current_value).sum();
        let total_return = total_current_value - total_invested;
        let percentage_up = if total_invested.is_zero() {
            Decimal::ZERO
        } else {
            round_money(total_return / total_invested * Decimal::ONE_HUNDRED)
        };

        PortfolioSummary {
            total_invested,
            total_return,
            total_current_value,
            percentage_up,
        }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_portfolio(&self, user_id: &str) -> Result<PortfolioResult> {
        let lots = self.lot_repository.load_lots_for_user(user_id)?;
        debug!("Valuing {} lots for user {}", lots.len(), user_id);
        Ok(self.value_lots(lots).await)
    }

    async fn value_lots(&self, lots: Vec<Lot>) -> PortfolioResult {
        if lots.is_empty() {
            return PortfolioResult::default();
        }

        let groups = group_lots(lots);
        let window = PriceWindow::trailing_months(PORTFOLIO_HISTORY_MONTHS);
        let builder = &self.builder;

        let builds: Vec<_> = groups
            .iter()
            .map(|group| builder.build(group, window))
            .collect();
        // `buffered` yields in input order regardless of completion order.
        let outcomes: Vec<_> = stream::iter(builds)
            .buffered(self.concurrency)
            .collect()
            .await;

        let holdings: Vec<Holding> = outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                Ok(holding) => Some(holding),
                Err(e) => {
                    warn!("Skipping {} in portfolio: {}", e.ticker(), e);
                    None
                }
            })
            .collect();

        PortfolioResult {
            summary: Self::summarize(&holdings),
            holdings,
        }
    }
}
