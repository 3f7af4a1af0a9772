//! Portfolio level models.

use rust_decimal::Decimal;

use crate::portfolio::holdings_model::Holding;

/// Totals across every holding that could be valued.
///
/// Amounts are exact sums; rounding happens when the result is serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub total_return: Decimal,
    pub total_current_value: Decimal,
    pub percentage_up: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioResult {
    pub summary: PortfolioSummary,
    pub holdings: Vec<Holding>,
}
