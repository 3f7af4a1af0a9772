use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use stocklive_market_data::{AssetProfile, MarketDataError, MarketDataProvider, Quote};

use crate::errors::PriceSourceError;
use crate::prices::{IssuerInfo, MarketDataPriceSource, PriceSourceTrait, PriceWindow};

/// Provider that replays scripted history results, one per call.
struct ScriptedProvider {
    history: Mutex<Vec<Result<Vec<Quote>, MarketDataError>>>,
    profile: Option<AssetProfile>,
    delay: Option<Duration>,
    history_calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(history: Vec<Result<Vec<Quote>, MarketDataError>>) -> Self {
        Self {
            history: Mutex::new(history),
            profile: None,
            delay: None,
            history_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl MarketDataProvider for ScriptedProvider {
    fn id(&self) -> &'static str {
        "SCRIPTED"
    }

    async fn get_historical_quotes(
        &self,
        _symbol: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, MarketDataError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let mut script = self.history.lock().unwrap();
        if script.is_empty() {
            return Ok(Vec::new());
        }
        script.remove(0)
    }

    async fn get_profile(&self, symbol: &str) -> Result<AssetProfile, MarketDataError> {
        self.profile
            .clone()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}

fn quote(day: u32, close: rust_decimal::Decimal) -> Quote {
    Quote::new(
        Utc.with_ymd_and_hms(2024, 3, day, 14, 30, 0).unwrap(),
        close,
    )
}

fn window() -> PriceWindow {
    PriceWindow::trailing_months_from(Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap(), 1)
}

fn source(provider: Arc<ScriptedProvider>) -> MarketDataPriceSource {
    MarketDataPriceSource::new(provider).with_retry_delay(Duration::from_millis(1))
}

#[tokio::test]
async fn test_history_is_sorted_by_date() {
    let provider = Arc::new(ScriptedProvider::new(vec![Ok(vec![
        quote(5, dec!(12)),
        quote(4, dec!(11)),
    ])]));

    let points = source(provider).fetch_history("AAPL", window()).await.unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    assert_eq!(points[1].close, dec!(12));
}

#[tokio::test]
async fn test_transient_failure_is_retried_once() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Err(MarketDataError::RateLimited {
            provider: "SCRIPTED".to_string(),
        }),
        Ok(vec![quote(4, dec!(11))]),
    ]));

    let points = source(provider.clone())
        .fetch_history("AAPL", window())
        .await
        .unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(provider.history_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_permanent_failure_is_not_retried() {
    let provider = Arc::new(ScriptedProvider::new(vec![Err(
        MarketDataError::SymbolNotFound("ZZZZ".to_string()),
    )]));

    let err = source(provider.clone())
        .fetch_history("ZZZZ", window())
        .await
        .unwrap_err();

    assert!(matches!(err, PriceSourceError::Provider { ref ticker, .. } if ticker == "ZZZZ"));
    assert_eq!(provider.history_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let mut provider = ScriptedProvider::new(vec![Ok(vec![quote(4, dec!(11))])]);
    provider.delay = Some(Duration::from_millis(500));
    let provider = Arc::new(provider);

    let err = source(provider)
        .with_timeout(Duration::from_millis(20))
        .fetch_history("AAPL", window())
        .await
        .unwrap_err();

    assert!(matches!(err, PriceSourceError::Timeout { timeout_ms: 20, .. }));
}

#[tokio::test]
async fn test_issuer_info_maps_profile() {
    let mut provider = ScriptedProvider::new(Vec::new());
    provider.profile = Some(
        AssetProfile::with_name("Apple Inc.")
            .sector("Technology")
            .market_cap(2.8e12),
    );

    let info = source(Arc::new(provider)).fetch_issuer_info("AAPL").await;

    assert_eq!(info.long_name.as_deref(), Some("Apple Inc."));
    assert_eq!(info.sector.as_deref(), Some("Technology"));
    assert_eq!(info.market_cap, Some(2_800_000_000_000));
}

#[tokio::test]
async fn test_issuer_info_failure_yields_empty_info() {
    let provider = Arc::new(ScriptedProvider::new(Vec::new()));

    let info = source(provider).fetch_issuer_info("AAPL").await;

    assert_eq!(info, IssuerInfo::default());
}

#[tokio::test]
async fn test_issuer_info_keeps_unknown_name_null() {
    let mut provider = ScriptedProvider::new(Vec::new());
    provider.profile = Some(AssetProfile::default().sector("Technology"));

    let info = source(Arc::new(provider)).fetch_issuer_info("XYZ").await;

    assert_eq!(info.long_name, None);
    assert_eq!(info.sector.as_deref(), Some("Technology"));
    assert_eq!(info.market_cap, None);
}
