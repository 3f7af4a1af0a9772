use std::sync::Arc;

use rand::{rngs::OsRng, RngCore};
use stocklive_core::{
    chat::ChatResponder,
    contact::{ContactService, ContactServiceTrait},
    content::{ContentService, ContentServiceTrait, LessonCatalog},
    lots::{LotService, LotServiceTrait},
    portfolio::{PortfolioService, PortfolioServiceTrait},
    prices::{MarketDataPriceSource, PriceSourceTrait, StockLookupService, StockLookupServiceTrait},
    users::{UserService, UserServiceTrait},
};
use stocklive_market_data::{MarketDataProvider, YahooProvider};
use stocklive_storage_sqlite::{
    blog::BlogRepository,
    db::{self, write_actor},
    lots::LotRepository,
    users::UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    auth::{decode_secret_key, AuthConfig, AuthManager},
    config::Config,
};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub lot_service: Arc<dyn LotServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub stock_lookup_service: Arc<dyn StockLookupServiceTrait>,
    pub content_service: Arc<dyn ContentServiceTrait>,
    pub contact_service: Arc<dyn ContactServiceTrait>,
    pub chat_responder: Arc<ChatResponder>,
    pub auth: Arc<AuthManager>,
    /// Owner of the subscriber-only portfolio
    pub master_portfolio_email: Option<String>,
    pub usa_portfolio_email: Option<String>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("SL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn jwt_secret(config: &Config) -> anyhow::Result<Vec<u8>> {
    match config.secret_key.as_deref() {
        Some(raw) => decode_secret_key(raw),
        None => {
            tracing::warn!(
                "SL_SECRET_KEY is not set; using a random signing key. Sessions will not survive a restart."
            );
            let mut secret = vec![0u8; 32];
            OsRng.fill_bytes(&mut secret);
            Ok(secret)
        }
    }
}

/// Builds the application state backed by Yahoo Finance.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider: Arc<dyn MarketDataProvider> = Arc::new(YahooProvider::new()?);
    build_state_with_provider(config, provider).await
}

/// Builds the application state around an explicit market data provider.
pub async fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn MarketDataProvider>,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone())?;

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let lot_repository = Arc::new(LotRepository::new(pool.clone(), writer.clone()));
    let blog_repository = Arc::new(BlogRepository::new(pool.clone(), writer.clone()));

    let price_source: Arc<dyn PriceSourceTrait> = Arc::new(
        MarketDataPriceSource::new(provider).with_timeout(config.provider_timeout),
    );

    let user_service = Arc::new(UserService::new(user_repository));
    let lot_service = Arc::new(LotService::new(lot_repository.clone()));
    let portfolio_service = Arc::new(
        PortfolioService::new(lot_repository, price_source.clone())
            .with_concurrency(config.portfolio_concurrency),
    );
    let stock_lookup_service = Arc::new(StockLookupService::new(price_source));
    let content_service = Arc::new(ContentService::new(
        LessonCatalog::default_catalog(),
        blog_repository,
    ));
    // No outbound mail transport is wired; submissions are queued.
    let contact_service = Arc::new(ContactService::new(None));

    let auth = Arc::new(AuthManager::new(&AuthConfig {
        jwt_secret: jwt_secret(config)?,
        access_token_ttl: config.token_ttl,
    }));

    Ok(Arc::new(AppState {
        user_service,
        lot_service,
        portfolio_service,
        stock_lookup_service,
        content_service,
        contact_service,
        chat_responder: Arc::new(ChatResponder::default()),
        auth,
        master_portfolio_email: config.master_portfolio_email.clone(),
        usa_portfolio_email: config.usa_portfolio_email.clone(),
        db_path,
    }))
}
