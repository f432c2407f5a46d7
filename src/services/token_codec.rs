use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::domain::Claims;
use crate::utils::Config;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),

    #[error("token signature verification failed")]
    InvalidSignature,

    #[error("token is structurally malformed")]
    Malformed,
}

/// Encodes claims into signed, self-contained token strings and verifies
/// untrusted ones. Signing is HS256 under the configured secret; any
/// bit-flip in either the claims or the signature part fails verification.
#[derive(Clone)]
pub struct TokenCodec {
    config: Arc<Config>,
}

impl TokenCodec {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    // Sign claims into a token string.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.config.jwt_secret().as_bytes()),
        )
        .map_err(TokenError::Signing)
    }

    /// Verify and parse an untrusted token string.
    ///
    /// Expiry is deliberately not checked here: a successfully decoded but
    /// expired token is a distinct outcome from a tampered one, and the
    /// caller owns the clock comparison.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                TokenError::InvalidSignature
            }
            _ => TokenError::Malformed,
        })
    }
}
