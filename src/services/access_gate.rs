use chrono::{DateTime, Utc};

use crate::domain::Claims;
use crate::errors::GateError;
use crate::services::TokenCodec;

/// Authorization checkpoint applied before a protected operation runs.
///
/// Each request is decided independently in one terminal step; the only
/// shared state touched is the read-only signing config inside the codec.
pub struct AccessGate {
    codec: TokenCodec,
}

impl AccessGate {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Decide whether a request carrying `token` may proceed at time `now`.
    ///
    /// Check order is contractual: missing token, then signature/structure,
    /// then expiry. Clients key on the distinct reason per branch.
    pub fn authorize(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, GateError> {
        if token.is_empty() {
            return Err(GateError::TokenMissing);
        }

        let claims = self
            .codec
            .decode(token)
            .map_err(|_| GateError::InvalidToken)?;

        if now.timestamp() > claims.exp {
            return Err(GateError::TokenExpired);
        }

        Ok(claims)
    }
}
