//! SQLite storage implementation for purchase lots.

mod model;
mod repository;

pub use model::{LotDB, NewLotDB};
pub use repository::LotRepository;
