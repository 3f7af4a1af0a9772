//! Holding domain models.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lots::Lot;
use crate::prices::PricePoint;

/// Direction of a holding relative to its cost basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Performance {
    Up,
    Down,
    Neutral,
}

/// One ticker's valuation, built fresh for every portfolio request.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub ticker: String,
    pub long_name: Option<String>,
    pub sector: Option<String>,
    pub market_cap: Option<u64>,
    pub earliest_buy_date: Option<NaiveDate>,
    pub weighted_avg_price: Decimal,
    pub current_price: Decimal,
    pub total_quantity: Decimal,
    pub performance: Performance,
    pub percentage_change: Decimal,
    /// Cost basis rounded to cents; totals sum this value
    pub invested: Decimal,
    pub current_value: Decimal,
    pub history: Vec<PricePoint>,
}

/// All lots for one ticker. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingGroup {
    pub ticker: String,
    pub lots: Vec<Lot>,
}

impl HoldingGroup {
    pub fn total_quantity(&self) -> Decimal {
        self.lots.iter().map(|l| l.quantity).sum()
    }

    pub fn invested(&self) -> Decimal {
        self.lots.iter().map(Lot::cost).sum()
    }

    pub fn earliest_buy_date(&self) -> Option<NaiveDate> {
        self.lots.iter().filter_map(|l| l.buy_date).min()
    }
}

/// Groups lots by ticker, keeping tickers in the order they first appear.
pub fn group_lots(lots: Vec<Lot>) -> Vec<HoldingGroup> {
    let mut groups: Vec<HoldingGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for lot in lots {
        match index.get(&lot.ticker) {
            Some(&i) => groups[i].lots.push(lot),
            None => {
                index.insert(lot.ticker.clone(), groups.len());
                groups.push(HoldingGroup {
                    ticker: lot.ticker.clone(),
                    lots: vec![lot],
                });
            }
        }
    }

    groups
}
