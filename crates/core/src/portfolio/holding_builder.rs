//! Builds a single [`Holding`] from one ticker's lots and its prices.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::constants::HOLDING_HISTORY_LIMIT;
use crate::errors::HoldingError;
use crate::portfolio::holdings_model::{Holding, HoldingGroup, Performance};
use crate::prices::{PricePoint, PriceSourceTrait, PriceWindow};
use crate::utils::decimal_utils::{percentage_change, round_money};

pub struct HoldingBuilder {
    price_source: Arc<dyn PriceSourceTrait>,
}

impl HoldingBuilder {
    pub fn new(price_source: Arc<dyn PriceSourceTrait>) -> Self {
        Self { price_source }
    }

    /// Values `group` against the daily closes inside `window`.
    ///
    /// Fails with [`HoldingError::InvalidHolding`] when the group's total
    /// quantity is not positive, and with [`HoldingError::PriceUnavailable`]
    /// when no usable close could be fetched. Issuer metadata never fails
    /// the holding.
    pub async fn build(
        &self,
        group: &HoldingGroup,
        window: PriceWindow,
    ) -> Result<Holding, HoldingError> {
        let ticker = group.ticker.as_str();

        let total_quantity = group.total_quantity();
        if total_quantity <= Decimal::ZERO {
            return Err(HoldingError::InvalidHolding {
                ticker: ticker.to_string(),
                reason: "quantity must be positive".to_string(),
            });
        }

        let invested = group.invested();
        let weighted_avg_price = round_money(invested / total_quantity);

        let closes = self
            .price_source
            .fetch_history(ticker, window)
            .await
            .map_err(|e| HoldingError::PriceUnavailable {
                ticker: ticker.to_string(),
                reason: e.to_string(),
            })?;
        let latest_close = closes
            .last()
            .map(|p| p.close)
            .ok_or_else(|| HoldingError::PriceUnavailable {
                ticker: ticker.to_string(),
                reason: "no price history returned".to_string(),
            })?;

        let current_price = round_money(latest_close);
        let current_value = round_money(current_price * total_quantity);

        let (performance, percentage_change) = if weighted_avg_price.is_zero() {
            (Performance::Neutral, Decimal::ZERO)
        } else if current_price >= weighted_avg_price {
            (
                Performance::Up,
                percentage_change(current_price, weighted_avg_price),
            )
        } else {
            (
                Performance::Down,
                percentage_change(current_price, weighted_avg_price),
            )
        };

        let issuer = self.price_source.fetch_issuer_info(ticker).await;

        Ok(Holding {
            ticker: ticker.to_string(),
            long_name: issuer.long_name,
            sector: issuer.sector,
            market_cap: issuer.market_cap,
            earliest_buy_date: group.earliest_buy_date(),
            weighted_avg_price,
            current_price,
            total_quantity,
            performance,
            percentage_change,
            invested: round_money(invested),
            current_value,
            history: trailing_history(closes),
        })
    }
}

/// Keeps the most recent closes, oldest first, rounded for display.
fn trailing_history(closes: Vec<PricePoint>) -> Vec<PricePoint> {
    let skip = closes.len().saturating_sub(HOLDING_HISTORY_LIMIT);
    closes
        .into_iter()
        .skip(skip)
        .map(|p| PricePoint::new(p.date, round_money(p.close)))
        .collect()
}
