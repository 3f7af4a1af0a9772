#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use stocklive_market_data::{AssetProfile, MarketDataError, MarketDataProvider, Quote};
use stocklive_server::{api::app_router, build_state_with_provider, config::Config, AppState};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

/// In-memory provider: known symbols get a fixed series of daily closes,
/// everything else is reported as not found.
#[derive(Default)]
pub struct MockProvider {
    closes: HashMap<String, Vec<Decimal>>,
}

impl MockProvider {
    pub fn with_closes(mut self, symbol: &str, closes: Vec<Decimal>) -> Self {
        self.closes.insert(symbol.to_string(), closes);
        self
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn get_historical_quotes(
        &self,
        symbol: &str,
        _start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, MarketDataError> {
        let closes = self
            .closes
            .get(symbol)
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;
        let days = closes.len() as i64;
        Ok(closes
            .iter()
            .enumerate()
            .map(|(i, close)| Quote::new(end - Duration::days(days - i as i64), *close))
            .collect())
    }

    async fn get_profile(&self, symbol: &str) -> Result<AssetProfile, MarketDataError> {
        if !self.closes.contains_key(symbol) {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        Ok(AssetProfile::with_name(format!("{symbol} Inc."))
            .sector("Technology")
            .market_cap(1.5e12))
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    _dir: TempDir,
}

pub async fn spawn_app(provider: MockProvider, vars: &[(&str, &str)]) -> TestApp {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db").to_string_lossy().to_string();
    let mut env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    env.insert("SL_DB_PATH".to_string(), db_path);
    env.insert("SL_PROVIDER_TIMEOUT_MS".to_string(), "2000".to_string());

    let config = Config::from_lookup(|key| env.get(key).cloned()).unwrap();
    let state = build_state_with_provider(&config, Arc::new(provider))
        .await
        .unwrap();
    TestApp {
        router: app_router(state.clone(), &config),
        state,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()));
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    /// Registers `email` and returns a fresh access token.
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        let credentials = serde_json::json!({ "email": email, "password": password });
        let (status, _) = self
            .post("/api/v1/auth/register", None, credentials.clone())
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = self.post("/api/v1/auth/login", None, credentials).await;
        assert_eq!(status, StatusCode::OK);
        body["accessToken"].as_str().unwrap().to_string()
    }
}
