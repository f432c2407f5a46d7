// Header carrying the access token. The wire format predates this service
// and clients send the token under this name rather than `Authorization`.
pub const TOKEN_HEADER: &str = "token";

// Timestamps in response bodies; issuance and denial use different
// separators, which clients already parse.
pub const ISSUE_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
pub const DENY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 180;

pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const JWT_ISSUER_ENV_VAR: &str = "JWT_ISSUER";
    pub const TOKEN_TTL_SECONDS_ENV_VAR: &str = "TOKEN_TTL_SECONDS";
}
