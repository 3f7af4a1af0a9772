use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stocklive_core::{errors::Error as CoreError, prices::StockOverview};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn get_stock(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<StockOverview>> {
    let overview = state
        .stock_lookup_service
        .lookup(&symbol)
        .await
        .map_err(|err| match err {
            CoreError::PriceSource(source) => {
                tracing::warn!("Stock lookup for {} failed: {}", symbol, source);
                ApiError::BadGateway("stock-fetch-failed".to_string())
            }
            other => ApiError::from(other),
        })?;
    Ok(Json(overview))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stock/{symbol}", get(get_stock))
}
