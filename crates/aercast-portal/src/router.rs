//! Axum router — maps URL paths to handlers.

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::auth::{login, register};
use crate::handlers::pages::{index_page, login_page, register_page};
use crate::state::{PortalState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: PortalState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/", get(login_page))
        .route("/login", get(login_page).post(login))
        .route("/register", get(register_page).post(register))
        .route("/index", get(index_page))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
