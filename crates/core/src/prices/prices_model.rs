//! Price data models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::months_before;

/// Time range for a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PriceWindow {
    /// Window covering the `months` calendar months up to now.
    pub fn trailing_months(months: u32) -> Self {
        Self::trailing_months_from(Utc::now(), months)
    }

    pub fn trailing_months_from(end: DateTime<Utc>, months: u32) -> Self {
        Self {
            start: months_before(end, months),
            end,
        }
    }
}

/// A daily close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: Decimal,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        Self { date, close }
    }
}

/// Descriptive issuer data. Every field is optional; `None` means unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerInfo {
    pub long_name: Option<String>,
    pub sector: Option<String>,
    pub market_cap: Option<u64>,
}

/// Response of the single-stock lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockOverview {
    pub symbol: String,
    pub history: Vec<PricePoint>,
    pub info: IssuerInfo,
}
