//! Prices module - the adapter between the valuation pipeline and the
//! market-data provider.

mod price_source;
mod prices_model;
mod prices_traits;
mod stock_lookup_service;

#[cfg(test)]
mod price_source_tests;

pub use price_source::MarketDataPriceSource;
pub use prices_model::{IssuerInfo, PricePoint, PriceWindow, StockOverview};
pub use prices_traits::{PriceSourceTrait, StockLookupServiceTrait};
pub use stock_lookup_service::StockLookupService;
