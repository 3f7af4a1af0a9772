use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    Buy,
    Hold,
    Watch,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockRecommendation {
    pub name: String,
    pub price: Decimal,
    pub recommendation: Recommendation,
}

impl StockRecommendation {
    fn new(name: &str, price: Decimal, recommendation: Recommendation) -> Self {
        Self {
            name: name.to_string(),
            price,
            recommendation,
        }
    }
}

/// Curated picks served on the recommendations page.
pub fn default_recommendations() -> Vec<StockRecommendation> {
    vec![
        StockRecommendation::new("Apple Inc.", dec!(185.12), Recommendation::Buy),
        StockRecommendation::new("Microsoft Corp.", dec!(411.78), Recommendation::Hold),
        StockRecommendation::new("NVIDIA Corp.", dec!(119.52), Recommendation::Watch),
    ]
}
