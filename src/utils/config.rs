use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts;

/// Signing configuration shared by every encode/decode call.
///
/// Built once at startup and passed explicitly to the codec and the issuer,
/// so tests can run with a distinct secret per test. Loaded read-only; no
/// lock is needed afterwards. Deliberately no `Debug` impl: the secret must
/// never end up in logs.
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    issuer: String,
    token_ttl_seconds: i64,
}

impl Config {
    pub fn new(
        jwt_secret: impl Into<String>,
        issuer: impl Into<String>,
        token_ttl_seconds: i64,
    ) -> Result<Self, ConfigError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT secret must not be empty"));
        }
        Ok(Self {
            jwt_secret,
            issuer: issuer.into(),
            token_ttl_seconds,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let jwt_secret = req_var(consts::env::JWT_SECRET_ENV_VAR)?;
        let issuer =
            opt_var(consts::env::JWT_ISSUER_ENV_VAR).unwrap_or_else(|| "auth-gate".into());
        let token_ttl_seconds = match opt_var(consts::env::TOKEN_TTL_SECONDS_ENV_VAR) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| ConfigError::Invalid(consts::env::TOKEN_TTL_SECONDS_ENV_VAR))?,
            None => consts::DEFAULT_TOKEN_TTL_SECONDS,
        };

        Self::new(jwt_secret, issuer, token_ttl_seconds)
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn jwt_issuer(&self) -> &str {
        &self.issuer
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}
