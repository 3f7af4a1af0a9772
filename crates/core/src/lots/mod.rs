//! Lots module - purchase records that feed portfolio valuation.

mod lots_model;
mod lots_service;
mod lots_traits;


pub use lots_model::{Lot, NewLot};
pub use lots_service::LotService;
pub use lots_traits::{LotRepositoryTrait, LotServiceTrait};
