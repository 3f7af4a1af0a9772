use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::lots::lots_model::{Lot, NewLot};
use crate::lots::lots_traits::{LotRepositoryTrait, LotServiceTrait};

pub struct LotService {
    repository: Arc<dyn LotRepositoryTrait>,
}

impl LotService {
    pub fn new(repository: Arc<dyn LotRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn normalize(lot: NewLot) -> Result<NewLot> {
        let ticker = lot.ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(ValidationError::MissingField("ticker".to_string()).into());
        }
        if lot.buy_price < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "buy price for {} must not be negative",
                ticker
            ))
            .into());
        }
        if lot.quantity.is_zero() {
            return Err(ValidationError::InvalidInput(format!(
                "quantity for {} must not be zero",
                ticker
            ))
            .into());
        }
        Ok(NewLot { ticker, ..lot })
    }
}

#[async_trait]
impl LotServiceTrait for LotService {
    fn get_lots(&self, user_id: &str) -> Result<Vec<Lot>> {
        self.repository.load_lots_for_user(user_id)
    }

    async fn record_lots(&self, user_id: &str, lots: Vec<NewLot>) -> Result<usize> {
        if lots.is_empty() {
            return Ok(0);
        }
        let normalized = lots
            .into_iter()
            .map(Self::normalize)
            .collect::<Result<Vec<_>>>()?;
        debug!("Recording {} lots for user {}", normalized.len(), user_id);
        self.repository
            .insert_lots(user_id.to_string(), normalized)
            .await
    }
}
