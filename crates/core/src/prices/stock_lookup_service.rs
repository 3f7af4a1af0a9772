use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::constants::STOCK_LOOKUP_HISTORY_MONTHS;
use crate::errors::{Result, ValidationError};
use crate::prices::prices_model::{PricePoint, PriceWindow, StockOverview};
use crate::prices::prices_traits::{PriceSourceTrait, StockLookupServiceTrait};
use crate::utils::decimal_utils::round_money;

/// Recent history and issuer profile for a single symbol.
pub struct StockLookupService {
    price_source: Arc<dyn PriceSourceTrait>,
}

impl StockLookupService {
    pub fn new(price_source: Arc<dyn PriceSourceTrait>) -> Self {
        Self { price_source }
    }
}

#[async_trait]
impl StockLookupServiceTrait for StockLookupService {
    async fn lookup(&self, symbol: &str) -> Result<StockOverview> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }

        let window = PriceWindow::trailing_months(STOCK_LOOKUP_HISTORY_MONTHS);
        let history = self
            .price_source
            .fetch_history(&symbol, window)
            .await?
            .into_iter()
            .map(|p| PricePoint::new(p.date, round_money(p.close)))
            .collect::<Vec<_>>();
        debug!("Fetched {} history points for {}", history.len(), symbol);

        let info = self.price_source.fetch_issuer_info(&symbol).await;

        Ok(StockOverview {
            symbol,
            history,
            info,
        })
    }
}
