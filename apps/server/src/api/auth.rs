use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::{login, logout, register, session, subscription};
use crate::main_lib::AppState;

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/session", get(session))
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/subscription", post(subscription))
}
