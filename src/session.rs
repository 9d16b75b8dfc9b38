//! Per-user authentication state.
//!
//! One `Session` lives in each `GooseUser`'s session-data slot, created by the
//! on-start login transaction and never shared across users. The
//! authorization header value is derived at construction, so it cannot go
//! stale relative to the token: obtaining a new token means building a new
//! `Session`.

use serde::Deserialize;

/// JSON body returned by `/application/token/login/`.
///
/// Deserialization fails if `auth_token` is absent, which fails the login
/// transaction and with it that simulated user's startup.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub auth_token: String,
}

/// Token plus the derived `Authorization` header value (`Token <token>`).
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    auth_header: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let auth_header = format!("Token {token}");
        Session { token, auth_header }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header on every non-login request.
    pub fn auth_header(&self) -> &str {
        &self.auth_header
    }
}
