//! Service layer: credential handling and token issuance.

pub mod auth;
pub mod session;
