//! Lot domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single stock purchase.
///
/// Several lots may share a ticker. `buy_date` is absent when the stored
/// value is missing or unparseable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub ticker: String,
    pub buy_date: Option<NaiveDate>,
    pub buy_price: Decimal,
    pub quantity: Decimal,
}

impl Lot {
    pub fn new(ticker: impl Into<String>, buy_price: Decimal, quantity: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            buy_date: None,
            buy_price,
            quantity,
        }
    }

    pub fn bought_on(mut self, date: NaiveDate) -> Self {
        self.buy_date = Some(date);
        self
    }

    /// Cost of this lot, exact.
    pub fn cost(&self) -> Decimal {
        self.buy_price * self.quantity
    }
}

/// Input model for recording a purchase
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewLot {
    pub ticker: String,
    pub buy_date: Option<NaiveDate>,
    pub buy_price: Decimal,
    pub quantity: Decimal,
}
