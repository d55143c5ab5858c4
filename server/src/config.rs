//! Environment configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything deploy-specific arrives through environment variables. Every
//! variable has a local-development default; a deployed instance must set
//! them all, and startup warns loudly when the signing secret is defaulted.

use std::path::PathBuf;

const DEFAULT_SESSION_SECRET: &str = "dev-secret-change-me";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_USERS_FILE: &str = "users.json";
const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// HS256 signing secret for session tokens (`SESSION_SECRET`).
    pub session_secret: String,
    /// Listening port (`PORT`).
    pub port: u16,
    /// The one origin allowed to call the API cross-origin (`CLIENT_ORIGIN`).
    pub client_origin: String,
    /// Path of the JSON user store (`USERS_FILE`).
    pub users_file: PathBuf,
    /// bcrypt work factor (`BCRYPT_COST`).
    pub bcrypt_cost: u32,
}

pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_owned())
}

pub(crate) fn env_u16(key: &str, default: u16) -> u16 {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

pub(crate) fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

impl Config {
    /// Load configuration, falling back to local-development defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let session_secret = env_or("SESSION_SECRET", DEFAULT_SESSION_SECRET);
        if session_secret == DEFAULT_SESSION_SECRET {
            tracing::warn!("SESSION_SECRET not set — using the development default; never deploy like this");
        }

        Self {
            session_secret,
            port: env_u16("PORT", DEFAULT_PORT),
            client_origin: env_or("CLIENT_ORIGIN", DEFAULT_CLIENT_ORIGIN),
            users_file: PathBuf::from(env_or("USERS_FILE", DEFAULT_USERS_FILE)),
            bcrypt_cost: env_u32("BCRYPT_COST", DEFAULT_BCRYPT_COST),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
