use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Payload embedded in an access token.
///
/// A value is minted once at issuance and reconstructed fresh on every
/// decode; it is never mutated afterwards. `exp` is always `iat` plus the
/// configured TTL at mint time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String, // Subject (user name)
    pub iss: String, // Issuer
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at time
}

impl Claims {
    pub fn new(
        subject: impl Into<String>,
        issuer: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Claims {
            sub: subject.into(),
            iss: issuer.into(),
            exp: (issued_at + ttl).timestamp(),
            iat: issued_at.timestamp(),
        }
    }
}
