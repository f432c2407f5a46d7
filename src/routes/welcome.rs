use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::app_state::AppState;
use crate::domain::{Claims, WelcomeResponse};

// Demonstration route behind the gate; echoes the authenticated subject's
// profile. The password never leaves the store.
pub async fn welcome(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, StatusCode> {
    let user = state
        .user_store
        .read()
        .await
        .get_user(&claims.sub)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;

    Ok(Json(WelcomeResponse {
        name: user.name,
        age: user.age,
    }))
}
