use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::api::SharedService;
use crate::api::dto::{
    AuthenticateRequest, AuthenticateResponse, DepositRequest, DepositResponse, HealthResponse,
    TransferRequest, TransferResponse,
};
use crate::api::error::ApiError;
use crate::domain::PositiveAmount;

/// POST /authenticate
pub async fn authenticate(
    State(service): State<SharedService>,
    body: Result<Json<AuthenticateRequest>, JsonRejection>,
) -> Result<Json<AuthenticateResponse>, ApiError> {
    let Json(request) = body?;

    let outcome = service.authenticate(&request.name, &request.pin_number)?;

    Ok(Json(AuthenticateResponse {
        message: "Authentication successful".to_string(),
        balance: outcome.balance,
    }))
}

/// POST /deposit
pub async fn deposit(
    State(service): State<SharedService>,
    body: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<Json<DepositResponse>, ApiError> {
    let Json(request) = body?;
    let amount = PositiveAmount::try_from(request.amount)?;

    let outcome = service.deposit(&request.name, amount)?;

    Ok(Json(DepositResponse {
        message: "Deposit successful".to_string(),
        balance: outcome.balance,
    }))
}

/// POST /bank-transfer
pub async fn transfer(
    State(service): State<SharedService>,
    body: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<Json<TransferResponse>, ApiError> {
    let Json(request) = body?;
    let amount = PositiveAmount::try_from(request.amount)?;

    let outcome = service.transfer(&request.sender_name, &request.receiver_name, amount)?;

    Ok(Json(TransferResponse {
        message: "Transfer successful".to_string(),
        sender_balance: outcome.sender_balance,
        receiver_balance: outcome.receiver_balance,
    }))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
