use crate::errors::Result;
use crate::lots::lots_model::{Lot, NewLot};
use async_trait::async_trait;

/// Trait for lot repository operations
#[async_trait]
pub trait LotRepositoryTrait: Send + Sync {
    /// Loads every lot owned by `user_id`, in insertion order.
    fn load_lots_for_user(&self, user_id: &str) -> Result<Vec<Lot>>;
    async fn insert_lots(&self, user_id: String, lots: Vec<NewLot>) -> Result<usize>;
}

/// Trait for lot service operations
#[async_trait]
pub trait LotServiceTrait: Send + Sync {
    fn get_lots(&self, user_id: &str) -> Result<Vec<Lot>>;
    async fn record_lots(&self, user_id: &str, lots: Vec<NewLot>) -> Result<usize>;
}
