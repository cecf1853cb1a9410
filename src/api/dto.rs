//! Request and response bodies.
//!
//! Money travels as plain JSON numbers; internally it is a `Decimal`.
//! Incoming amounts stay `f64` until the handler converts them, so range and
//! precision problems surface as domain errors instead of serde messages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticateRequest {
    pub name: String,
    pub pin_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticateResponse {
    pub message: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepositRequest {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepositResponse {
    pub message: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    pub sender_name: String,
    pub receiver_name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferResponse {
    pub message: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub sender_balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub receiver_balance: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
