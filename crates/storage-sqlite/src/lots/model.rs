//! Database models for purchase lots.
//!
//! Prices and quantities are stored as decimal strings so that no precision
//! is lost on the way through SQLite.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use log::warn;
use rust_decimal::Decimal;
use stocklive_core::lots::{Lot, NewLot};
use stocklive_core::utils::time_utils::parse_stored_date;

use crate::errors::StorageError;

/// Database model for lots
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::stock_lots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LotDB {
    pub id: i32,
    pub user_id: String,
    pub ticker: String,
    pub buy_date: Option<String>,
    pub buy_price: String,
    pub quantity: String,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new lot
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::stock_lots)]
pub struct NewLotDB {
    pub user_id: String,
    pub ticker: String,
    pub buy_date: Option<String>,
    pub buy_price: String,
    pub quantity: String,
    pub created_at: NaiveDateTime,
}

impl NewLotDB {
    pub fn from_domain(user_id: &str, lot: NewLot, created_at: NaiveDateTime) -> Self {
        Self {
            user_id: user_id.to_string(),
            ticker: lot.ticker,
            buy_date: lot.buy_date.map(|d| d.format("%Y-%m-%d").to_string()),
            buy_price: lot.buy_price.to_string(),
            quantity: lot.quantity.to_string(),
            created_at,
        }
    }
}

fn parse_decimal(field: &str, lot_id: i32, raw: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(raw.trim()).map_err(|e| {
        StorageError::MalformedValue(format!(
            "{} '{}' of lot {} is not a decimal: {}",
            field, raw, lot_id, e
        ))
    })
}

impl TryFrom<LotDB> for Lot {
    type Error = StorageError;

    /// Fails on a malformed price or quantity. A malformed date only loses
    /// the date.
    fn try_from(db: LotDB) -> Result<Self, Self::Error> {
        let buy_price = parse_decimal("buy_price", db.id, &db.buy_price)?;
        let quantity = parse_decimal("quantity", db.id, &db.quantity)?;
        let buy_date = db.buy_date.as_deref().and_then(|raw| {
            let parsed = parse_stored_date(raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                warn!("Ignoring unparseable buy date '{}' on lot {}", raw, db.id);
            }
            parsed
        });

        Ok(Lot {
            ticker: db.ticker,
            buy_date,
            buy_price,
            quantity,
        })
    }
}
