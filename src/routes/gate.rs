use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use log::{debug, warn};

use crate::app_state::AppState;
use crate::errors::GateError;
use crate::utils::consts::TOKEN_HEADER;

/// Middleware guarding protected routes: reads the `token` header, asks the
/// gate for a decision, and either forwards the request with the decoded
/// claims attached or short-circuits with the structured deny response.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, GateError> {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    let path = request.uri().path().to_owned();
    debug!("authorizing request to {}", path);

    match state.gate.authorize(&token, Utc::now()) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(err) => {
            warn!("denied request to {}: {}", path, err);
            Err(err)
        }
    }
}
