use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Local;

use crate::app_state::AppState;
use crate::domain::{LoginRequestBody, LoginResponse};
use crate::errors::LoginError;
use crate::services::AuthService;
use crate::utils::consts::ISSUE_DATE_FORMAT;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let token = AuthService::issue_token(state, &request.name, &request.password).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            code: StatusCode::OK.as_u16(),
            token,
            date: Local::now().format(ISSUE_DATE_FORMAT).to_string(),
        }),
    ))
}
