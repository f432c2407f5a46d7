use chrono::{Duration, Utc};

use crate::app_state::AppState;
use crate::domain::{Claims, UserStoreError};
use crate::errors::LoginError;

pub struct AuthService {}
impl AuthService {
    pub fn new() -> Self {
        AuthService {}
    }

    /// Authenticate `name`/`password` against the principal store and mint
    /// a signed access token for the subject.
    ///
    /// Bad credentials are an error value, never a panic; the boundary
    /// layer turns them into a response.
    pub async fn issue_token(
        state: AppState,
        name: &str,
        password: &str,
    ) -> Result<String, LoginError> {
        let validated = {
            state
                .user_store
                .read()
                .await
                .validate_user(name, password)
                .await
        };

        match validated {
            Err(UserStoreError::UserNotFound) | Err(UserStoreError::InvalidCredentials) => {
                return Err(LoginError::AuthenticationFailed)
            }
            Err(_) => return Err(LoginError::InternalServerError),
            Ok(()) => {}
        }

        let now = Utc::now();
        let ttl = Duration::seconds(state.config.token_ttl_seconds());
        let claims = Claims::new(name, state.config.jwt_issuer(), now, ttl);

        state
            .codec
            .encode(&claims)
            .map_err(|_| LoginError::TokenIssuanceFailed)
    }
}
