//! Portfolio module - valuation of lot groups into holdings and totals.
//!
//! ```text
//! lots ─▶ group_lots ─▶ HoldingBuilder (per ticker, bounded concurrency)
//!                              │
//!                              ▼
//!                    PortfolioService::summarize ─▶ PortfolioResponse
//! ```

pub mod holding_builder;
pub mod holdings_model;
pub mod portfolio_model;
pub mod portfolio_response;
pub mod portfolio_service;
pub mod portfolio_traits;


pub use holding_builder::HoldingBuilder;
pub use holdings_model::{group_lots, Holding, HoldingGroup, Performance};
pub use portfolio_model::{PortfolioResult, PortfolioSummary};
pub use portfolio_response::{
    HistoryPointResponse, HoldingResponse, PortfolioResponse, SummaryResponse,
};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
