use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid name or password.")]
    AuthenticationFailed,

    #[error("Failed to get token.")]
    TokenIssuanceFailed,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LoginError::Json(_) => StatusCode::BAD_REQUEST,
            LoginError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            LoginError::TokenIssuanceFailed => StatusCode::INTERNAL_SERVER_ERROR,
            LoginError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
