use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use stocklive_core::{lots::NewLot, portfolio::PortfolioResponse};

use crate::{
    auth::Claims,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Which portfolio a request is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PortfolioVariant {
    Me,
    Master,
    Usa,
}

impl PortfolioVariant {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "me" => Some(Self::Me),
            "master" => Some(Self::Master),
            "usa" => Some(Self::Usa),
            _ => None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordLotsResponse {
    recorded: usize,
}

fn has_valid_subscription(state: &AppState, claims: &Claims) -> ApiResult<bool> {
    let Some(code) = claims.subscription_code.as_deref() else {
        return Ok(false);
    };
    Ok(state
        .user_service
        .verify_subscription_code(&claims.email, code)?)
}

/// Resolves the user id whose lots back `variant`.
fn resolve_owner(state: &AppState, claims: &Claims, variant: PortfolioVariant) -> ApiResult<String> {
    let owner_email = match variant {
        PortfolioVariant::Me => return Ok(claims.sub.clone()),
        PortfolioVariant::Master => {
            if !has_valid_subscription(state, claims)? {
                return Err(ApiError::Forbidden("subscription-required".to_string()));
            }
            state.master_portfolio_email.as_deref()
        }
        PortfolioVariant::Usa => state.usa_portfolio_email.as_deref(),
    };

    let owner = match owner_email {
        Some(email) => state.user_service.find_by_email(email)?,
        None => None,
    };
    owner
        .map(|user| user.id)
        .ok_or_else(|| ApiError::NotFound("portfolio-owner-not-found".to_string()))
}

async fn get_portfolio(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(variant): Path<String>,
) -> ApiResult<Json<PortfolioResponse>> {
    let variant = PortfolioVariant::parse(&variant)
        .ok_or_else(|| ApiError::BadRequest("unknown-portfolio".to_string()))?;
    let owner_id = resolve_owner(&state, &claims, variant)?;
    let result = state.portfolio_service.get_portfolio(&owner_id).await?;
    tracing::debug!(
        "Valued {:?} portfolio with {} holdings",
        variant,
        result.holdings.len()
    );
    Ok(Json(PortfolioResponse::from(&result)))
}

async fn record_lots(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(lots): Json<Vec<NewLot>>,
) -> ApiResult<(StatusCode, Json<RecordLotsResponse>)> {
    let recorded = state.lot_service.record_lots(&claims.sub, lots).await?;
    Ok((StatusCode::CREATED, Json(RecordLotsResponse { recorded })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/me/lots", post(record_lots))
        .route("/portfolio/{variant}", get(get_portfolio))
}
