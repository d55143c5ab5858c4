//! Shared request/response types for the vitrine HTTP API.
//!
//! This crate owns the JSON wire representation used by both `server` and
//! `client`. Field names follow the flat-file era of the API, so existing
//! storefront deployments keep working unchanged.

use serde::{Deserialize, Serialize};

/// Body of `POST /signup`.
///
/// Fields default to empty when absent, so a missing field reads as an empty
/// one and fails server-side validation instead of JSON deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /login`. Absent fields read as empty, as for
/// [`SignupRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user. Never carries the password hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub name: String,
    pub email: String,
}

/// Generic acknowledgment body — success and failure responses both carry a
/// human-readable `message` the client surfaces inline next to the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Successful `POST /login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    /// Bearer token, signed server-side, expiring one hour after issuance.
    pub token: String,
    pub user: PublicUser,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
