//! Market data backed price source.
//!
//! Wraps a [`MarketDataProvider`] and translates its quotes and profiles
//! into the pipeline's own types. Every provider call is bounded by a
//! timeout, and failures the provider classifies as transient get one
//! delayed retry.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use num_traits::ToPrimitive;
use stocklive_market_data::{AssetProfile, MarketDataError, MarketDataProvider, RetryClass};

use crate::constants::{DEFAULT_PROVIDER_TIMEOUT_MS, PROVIDER_RETRY_DELAY_MS};
use crate::errors::PriceSourceError;
use crate::prices::prices_model::{IssuerInfo, PricePoint, PriceWindow};
use crate::prices::prices_traits::PriceSourceTrait;
use crate::utils::time_utils::duration_millis;

pub struct MarketDataPriceSource {
    provider: Arc<dyn MarketDataProvider>,
    timeout: Duration,
    retry_delay: Duration,
}

impl MarketDataPriceSource {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            timeout: Duration::from_millis(DEFAULT_PROVIDER_TIMEOUT_MS),
            retry_delay: Duration::from_millis(PROVIDER_RETRY_DELAY_MS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Runs `call` under the timeout, retrying once on a transient failure.
    async fn call_with_retry<T, F, Fut>(
        &self,
        ticker: &str,
        call: F,
    ) -> Result<T, PriceSourceError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, MarketDataError>>,
    {
        match self.call_once(ticker, call()).await {
            Err(PriceSourceError::Provider { source, .. })
                if source.retry_class() == RetryClass::WithBackoff =>
            {
                debug!(
                    "Transient provider failure for {}: {}. Retrying once",
                    ticker, source
                );
                tokio::time::sleep(self.retry_delay).await;
                self.call_once(ticker, call()).await
            }
            other => other,
        }
    }

    async fn call_once<T, Fut>(&self, ticker: &str, fut: Fut) -> Result<T, PriceSourceError>
    where
        Fut: Future<Output = Result<T, MarketDataError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(PriceSourceError::Provider {
                ticker: ticker.to_string(),
                source,
            }),
            Err(_) => Err(PriceSourceError::Timeout {
                ticker: ticker.to_string(),
                timeout_ms: duration_millis(self.timeout),
            }),
        }
    }
}

fn profile_to_issuer_info(profile: AssetProfile) -> IssuerInfo {
    IssuerInfo {
        long_name: profile.name.filter(|n| !n.trim().is_empty()),
        sector: profile.sector.filter(|s| !s.trim().is_empty()),
        market_cap: profile
            .market_cap
            .filter(|cap| cap.is_finite() && *cap >= 0.0)
            .and_then(|cap| cap.round().to_u64()),
    }
}

#[async_trait]
impl PriceSourceTrait for MarketDataPriceSource {
    async fn fetch_history(
        &self,
        ticker: &str,
        window: PriceWindow,
    ) -> Result<Vec<PricePoint>, PriceSourceError> {
        let quotes = self
            .call_with_retry(ticker, || {
                self.provider
                    .get_historical_quotes(ticker, window.start, window.end)
            })
            .await?;

        let mut points: Vec<PricePoint> = quotes
            .into_iter()
            .map(|q| PricePoint::new(q.date(), q.close))
            .collect();
        points.sort_by_key(|p| p.date);
        // Providers occasionally repeat the current session; keep the last bar per day.
        points.reverse();
        points.dedup_by_key(|p| p.date);
        points.reverse();
        Ok(points)
    }

    async fn fetch_issuer_info(&self, ticker: &str) -> IssuerInfo {
        match self
            .call_with_retry(ticker, || self.provider.get_profile(ticker))
            .await
        {
            Ok(profile) => profile_to_issuer_info(profile),
            Err(e) => {
                warn!(
                    "Issuer info unavailable for {} from {}: {}",
                    ticker,
                    self.provider.id(),
                    e
                );
                IssuerInfo::default()
            }
        }
    }
}
