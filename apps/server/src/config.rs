use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use stocklive_core::constants::{DEFAULT_PORTFOLIO_CONCURRENCY, DEFAULT_PROVIDER_TIMEOUT_MS};

const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Base64 (or 32-byte ASCII) JWT signing key. Generated at start-up when unset.
    pub secret_key: Option<String>,
    pub token_ttl: Duration,
    pub master_portfolio_email: Option<String>,
    pub usa_portfolio_email: Option<String>,
    pub provider_timeout: Duration,
    pub portfolio_concurrency: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let number = |key: &str, default: u64| -> u64 {
            var(key).and_then(|v| v.parse().ok()).unwrap_or(default)
        };

        let listen_addr: SocketAddr = var("SL_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid SL_LISTEN_ADDR")?;
        let db_path = var("SL_DB_PATH").unwrap_or_else(|| "./db/app.db".into());
        let cors_allow = var("SL_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms = number("SL_REQUEST_TIMEOUT_MS", 30_000);
        let token_ttl_secs = number("SL_TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS);
        let provider_timeout_ms = number("SL_PROVIDER_TIMEOUT_MS", DEFAULT_PROVIDER_TIMEOUT_MS);
        let portfolio_concurrency = number(
            "SL_PORTFOLIO_CONCURRENCY",
            DEFAULT_PORTFOLIO_CONCURRENCY as u64,
        )
        .max(1) as usize;

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            secret_key: var("SL_SECRET_KEY"),
            token_ttl: Duration::from_secs(token_ttl_secs),
            master_portfolio_email: var("SL_MASTER_PORTFOLIO_EMAIL"),
            usa_portfolio_email: var("SL_USA_PORTFOLIO_EMAIL"),
            provider_timeout: Duration::from_millis(provider_timeout_ms),
            portfolio_concurrency,
        })
    }
}
