//! HTTP boundary over [`AccountService`].
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /authenticate | `authenticate` |
//! | POST | /deposit | `deposit` |
//! | POST | /bank-transfer | `transfer` |
//! | GET | /health | `health` |
//!
//! Amount positivity is checked here, before a request reaches the service.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::service::AccountService;
use crate::store::InMemoryStore;

pub type SharedService = Arc<AccountService<InMemoryStore>>;

pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/authenticate", post(handlers::authenticate))
        .route("/deposit", post(handlers::deposit))
        .route("/bank-transfer", post(handlers::transfer))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
