//! Wire representation of a valued portfolio.
//!
//! Decimals become JSON numbers here. Monetary amounts are rounded to two
//! places, halves away from zero; `totalReturn` is derived from the rounded
//! totals so the published figures always add up.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::portfolio::holdings_model::{Holding, Performance};
use crate::portfolio::portfolio_model::{PortfolioResult, PortfolioSummary};
use crate::prices::PricePoint;
use crate::utils::decimal_utils::round_money;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub summary: SummaryResponse,
    pub holdings: Vec<HoldingResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_invested: f64,
    pub total_return: f64,
    pub total_current_value: f64,
    pub percentage_up: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingResponse {
    pub ticker: String,
    pub long_name: Option<String>,
    pub sector: Option<String>,
    pub market_cap: Option<u64>,
    pub earliest_buy_date: Option<String>,
    pub weighted_avg_price: f64,
    pub current_price: f64,
    pub total_quantity: f64,
    pub performance: Performance,
    pub percentage_change: f64,
    pub invested: f64,
    pub current_value: f64,
    pub history: Vec<HistoryPointResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPointResponse {
    pub date: String,
    pub close: f64,
}

fn to_number(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

impl From<&PortfolioSummary> for SummaryResponse {
    fn from(summary: &PortfolioSummary) -> Self {
        let total_invested = round_money(summary.total_invested);
        let total_current_value = round_money(summary.total_current_value);
        Self {
            total_invested: to_number(total_invested),
            total_return: to_number(total_current_value - total_invested),
            total_current_value: to_number(total_current_value),
            percentage_up: to_number(round_money(summary.percentage_up)),
        }
    }
}

impl From<&PricePoint> for HistoryPointResponse {
    fn from(point: &PricePoint) -> Self {
        Self {
            date: point.date.format("%Y-%m-%d").to_string(),
            close: to_number(round_money(point.close)),
        }
    }
}

impl From<&Holding> for HoldingResponse {
    fn from(holding: &Holding) -> Self {
        Self {
            ticker: holding.ticker.clone(),
            long_name: holding.long_name.clone(),
            sector: holding.sector.clone(),
            market_cap: holding.market_cap,
            earliest_buy_date: holding
                .earliest_buy_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
            weighted_avg_price: to_number(holding.weighted_avg_price),
            current_price: to_number(holding.current_price),
            total_quantity: to_number(holding.total_quantity),
            performance: holding.performance,
            percentage_change: to_number(holding.percentage_change),
            invested: to_number(round_money(holding.invested)),
            current_value: to_number(holding.current_value),
            history: holding.history.iter().map(HistoryPointResponse::from).collect(),
        }
    }
}

impl From<&PortfolioResult> for PortfolioResponse {
    fn from(result: &PortfolioResult) -> Self {
        Self {
            summary: SummaryResponse::from(&result.summary),
            holdings: result.holdings.iter().map(HoldingResponse::from).collect(),
        }
    }
}
