//! Environment-variable overrides for load test runs.
//!
//! Goose owns the real run parameters (`--host`, `-u`, `-r`, `-t`, report
//! files); this module only covers the knobs Goose has no flag for:
//!
//! - `DREAMAPP_USERNAME` / `DREAMAPP_PASSWORD` - login credentials
//!   (default: the seeded `Server` account)
//! - `DREAMAPP_HOST` - default target host applied when `--host` is omitted
//! - `DREAMAPP_TAGS` - comma-separated task tags; only matching tasks are
//!   registered. Unset or empty runs everything.

use std::collections::HashSet;
use std::env;

pub const DEFAULT_USERNAME: &str = "Server";
pub const DEFAULT_PASSWORD: &str = "SV123456";

/// Credential pair sent form-encoded to the login endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Load credentials from the environment, falling back to the seeded
    /// test account.
    pub fn from_env() -> Self {
        Credentials {
            username: env::var("DREAMAPP_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_string()),
            password: env::var("DREAMAPP_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string()),
        }
    }
}

/// Default host applied via `GooseDefault::Host` when `--host` is not given.
pub fn default_host() -> Option<String> {
    env::var("DREAMAPP_HOST").ok().filter(|host| !host.is_empty())
}

/// Tag filter read from `DREAMAPP_TAGS`; `None` means no filtering.
pub fn tag_filter() -> Option<HashSet<String>> {
    parse_tags(&env::var("DREAMAPP_TAGS").unwrap_or_default())
}

fn parse_tags(raw: &str) -> Option<HashSet<String>> {
    let tags: HashSet<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}
