//! Property-based tests for portfolio valuation.
//!
//! These tests verify that the summary identities hold across arbitrary lot
//! sets, using the `proptest` crate for random test case generation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use stocklive_core::errors::{PriceSourceError, Result};
use stocklive_core::lots::{Lot, LotRepositoryTrait, NewLot};
use stocklive_core::portfolio::{PortfolioResponse, PortfolioService, PortfolioServiceTrait};
use stocklive_core::prices::{IssuerInfo, PricePoint, PriceSourceTrait, PriceWindow};

// =============================================================================
// Fixtures
// =============================================================================

const TICKERS: [&str; 4] = ["AAPL", "MSFT", "NVDA", "DEAD"];

/// Prices every ticker except `DEAD`.
struct FixedPriceSource {
    closes: HashMap<&'static str, Decimal>,
}

#[async_trait]
impl PriceSourceTrait for FixedPriceSource {
    async fn fetch_history(
        &self,
        ticker: &str,
        _window: PriceWindow,
    ) -> std::result::Result<Vec<PricePoint>, PriceSourceError> {
        self.closes
            .get(ticker)
            .map(|close| {
                vec![PricePoint::new(
                    NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
                    *close,
                )]
            })
            .ok_or_else(|| PriceSourceError::Timeout {
                ticker: ticker.to_string(),
                timeout_ms: 1,
            })
    }

    async fn fetch_issuer_info(&self, _ticker: &str) -> IssuerInfo {
        IssuerInfo::default()
    }
}

struct NoLots;

#[async_trait]
impl LotRepositoryTrait for NoLots {
    fn load_lots_for_user(&self, _user_id: &str) -> Result<Vec<Lot>> {
        Ok(Vec::new())
    }

    async fn insert_lots(&self, _user_id: String, lots: Vec<NewLot>) -> Result<usize> {
        Ok(lots.len())
    }
}

fn service(closes: [Decimal; 3]) -> PortfolioService {
    let source = FixedPriceSource {
        closes: HashMap::from([
            ("AAPL", closes[0]),
            ("MSFT", closes[1]),
            ("NVDA", closes[2]),
        ]),
    };
    PortfolioService::new(Arc::new(NoLots), Arc::new(source))
}

fn value(service: &PortfolioService, lots: Vec<Lot>) -> stocklive_core::portfolio::PortfolioResult {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
        .block_on(service.value_lots(lots))
}

// =============================================================================
// Generators
// =============================================================================

/// Decimal with up to three fractional digits.
fn arb_amount(max_units: i64) -> impl Strategy<Value = Decimal> {
    (0..max_units * 1000).prop_map(|milli| Decimal::new(milli, 3))
}

fn arb_lot() -> impl Strategy<Value = Lot> {
    (
        prop::sample::select(TICKERS.to_vec()),
        arb_amount(1_000),
        (-5i64..50).prop_map(Decimal::from),
    )
        .prop_map(|(ticker, price, qty)| Lot::new(ticker, price, qty))
}

fn arb_closes() -> impl Strategy<Value = [Decimal; 3]> {
    (arb_amount(1_000), arb_amount(1_000), arb_amount(1_000)).prop_map(|(a, b, c)| [a, b, c])
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_total_return_identity(lots in prop::collection::vec(arb_lot(), 0..12), closes in arb_closes()) {
        let result = value(&service(closes), lots);
        let summary = &result.summary;

        prop_assert_eq!(summary.total_return, summary.total_current_value - summary.total_invested);

        let invested: Decimal = result.holdings.iter().map(|h| h.invested).sum();
        let current: Decimal = result.holdings.iter().map(|h| h.current_value).sum();
        prop_assert_eq!(summary.total_invested, invested);
        prop_assert_eq!(summary.total_current_value, current);

        if summary.total_invested.is_zero() {
            prop_assert_eq!(summary.percentage_up, Decimal::ZERO);
        }
    }

    #[test]
    fn prop_failed_and_non_positive_tickers_are_excluded(lots in prop::collection::vec(arb_lot(), 1..12), closes in arb_closes()) {
        let mut quantities: HashMap<String, Decimal> = HashMap::new();
        for lot in &lots {
            *quantities.entry(lot.ticker.clone()).or_default() += lot.quantity;
        }

        let result = value(&service(closes), lots);

        for holding in &result.holdings {
            prop_assert_ne!(holding.ticker.as_str(), "DEAD");
            prop_assert!(quantities[&holding.ticker] > Decimal::ZERO);
        }
        let expected = quantities
            .iter()
            .filter(|(ticker, qty)| ticker.as_str() != "DEAD" && **qty > Decimal::ZERO)
            .count();
        prop_assert_eq!(result.holdings.len(), expected);
    }

    #[test]
    fn prop_wire_totals_add_up(lots in prop::collection::vec(arb_lot(), 0..12), closes in arb_closes()) {
        let result = value(&service(closes), lots);
        let response = PortfolioResponse::from(&result);
        let summary = &response.summary;

        let total_return = Decimal::try_from(summary.total_return).unwrap();
        let total_current = Decimal::try_from(summary.total_current_value).unwrap();
        let total_invested = Decimal::try_from(summary.total_invested).unwrap();
        prop_assert_eq!(total_return.round_dp(2), (total_current - total_invested).round_dp(2));

        let holdings_invested: Decimal = response
            .holdings
            .iter()
            .map(|h| Decimal::try_from(h.invested).unwrap().round_dp(2))
            .sum();
        prop_assert_eq!(total_invested.round_dp(2), holdings_invested);
    }
}
