use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Serialize;
use stocklive_core::contact::{ContactRequest, DeliveryStatus};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
struct ContactResponse {
    status: DeliveryStatus,
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactRequest>,
) -> ApiResult<(StatusCode, Json<ContactResponse>)> {
    let status = state.contact_service.submit(payload).await?;
    Ok((StatusCode::ACCEPTED, Json(ContactResponse { status })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/contact", post(submit_contact))
}
