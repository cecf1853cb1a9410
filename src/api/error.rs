//! Maps domain errors and body rejections onto HTTP responses.
//!
//! Every error body has the shape `{"detail": "<message>"}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let status = match &error {
            Error::Validation(_) | Error::BalanceOverflow => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InsufficientFunds => StatusCode::BAD_REQUEST,
            Error::IO(_) | Error::Seed(_) | Error::DuplicateAccount(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Party;

    #[test]
    fn domain_errors_map_to_status_codes() {
        let cases = [
            (Error::Unauthorized, StatusCode::UNAUTHORIZED),
            (Error::NotFound(Party::Sender), StatusCode::NOT_FOUND),
            (Error::InsufficientFunds, StatusCode::BAD_REQUEST),
            (
                Error::Validation("amount must be greater than 0".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (Error::BalanceOverflow, StatusCode::UNPROCESSABLE_ENTITY),
            (
                Error::DuplicateAccount("user1".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status, expected);
        }
    }

    #[test]
    fn detail_carries_domain_message() {
        let api_error = ApiError::from(Error::NotFound(Party::Receiver));

        assert_eq!(api_error.detail, "Receiver not found");
    }
}
