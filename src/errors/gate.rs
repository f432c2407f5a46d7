use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Local;
use thiserror::Error;

use crate::domain::DenyResponse;
use crate::utils::consts::DENY_DATE_FORMAT;

/// Terminal denial reasons produced by the access gate. Each variant maps
/// to its own reason string; clients branch on the message text.
#[derive(Error, Debug, PartialEq)]
pub enum GateError {
    #[error("Token is empty.")]
    TokenMissing,

    #[error("Token is invalid.")]
    InvalidToken,

    #[error("Token is expired.")]
    TokenExpired,
}

impl IntoResponse for GateError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            GateError::TokenMissing => StatusCode::UNAUTHORIZED,
            GateError::InvalidToken => StatusCode::UNAUTHORIZED,
            // Expired tokens answer 500; existing clients branch on this
            // status and the message text.
            GateError::TokenExpired => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = DenyResponse {
            code: status.as_u16(),
            message: self.to_string(),
            date: Local::now().format(DENY_DATE_FORMAT).to_string(),
        };

        (status, Json(body)).into_response()
    }
}
