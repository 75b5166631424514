//! Server settings parsed from environment variables.

use site::state::contact::ContactPolicy;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub policy: ContactPolicy,
}

impl ServerConfig {
    /// - `PORT`: default 3000
    /// - `CONTACT_PHONE_REQUIRED`: `true` (default) or `false`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            policy: ContactPolicy {
                phone_required: parse_flag(std::env::var("CONTACT_PHONE_REQUIRED").ok().as_deref(), true),
            },
        }
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("1" | "true" | "yes" | "on") => true,
        Some("0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
