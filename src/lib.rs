//! In-memory banking API: authenticate, deposit and transfer over a seeded
//! account store, exposed through an axum HTTP boundary.

pub mod api;
pub mod config;
pub mod domain;
pub mod seed;
pub mod service;
pub mod store;

pub use domain::Error;
pub use service::AccountService;
pub use store::InMemoryStore;
