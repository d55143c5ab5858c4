//! Registration and login against the user store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin glue over two primitives: bcrypt for password hashing and the
//! stateless token signer in [`super::session`]. Error display strings are
//! the exact messages the storefront surfaces inline next to its forms.

use time::OffsetDateTime;
use wire::PublicUser;

use crate::services::session::TokenSigner;
use crate::store::{StoreError, User, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("All fields are required.")]
    Validation,
    #[error("User with this email already exists.")]
    Conflict,
    #[error("User not found.")]
    NotFound,
    #[error("Invalid credentials.")]
    Unauthorized,
    #[error("user store error: {0}")]
    Store(#[from] StoreError),
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Millisecond wall-clock timestamp used as the new user's id.
fn next_user_id() -> i64 {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    i64::try_from(millis).unwrap_or(i64::MAX)
}

/// Register a new user: validate, reject duplicate emails, hash the password
/// and rewrite the store.
///
/// The duplicate check and the insert are separate reads of the flat file.
/// Two same-email signups racing through this window can both pass the check;
/// see the store module for why that stays unfixed.
///
/// # Errors
///
/// `Validation` on any empty field, `Conflict` on a duplicate email, and
/// `Store`/`Hash` on infrastructure failure.
pub async fn register(
    repo: &dyn UserRepository,
    bcrypt_cost: u32,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::Validation);
    }
    if repo.find_by_email(email).await?.is_some() {
        return Err(AuthError::Conflict);
    }

    let password_hash = bcrypt::hash(password, bcrypt_cost)?;
    repo.insert(User {
        id: next_user_id(),
        name: name.to_owned(),
        email: email.to_owned(),
        password_hash,
    })
    .await?;
    Ok(())
}

/// Authenticate a user and issue a one-hour token. Never mutates the store
/// and never returns the password hash.
///
/// # Errors
///
/// `Validation` on any empty field, `NotFound` for an unknown email,
/// `Unauthorized` when the hash comparison fails.
pub async fn authenticate(
    repo: &dyn UserRepository,
    signer: &TokenSigner,
    email: &str,
    password: &str,
) -> Result<(String, PublicUser), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::Validation);
    }

    let Some(user) = repo.find_by_email(email).await? else {
        return Err(AuthError::NotFound);
    };
    if !bcrypt::verify(password, &user.password_hash)? {
        return Err(AuthError::Unauthorized);
    }

    let token = signer.issue(user.id, &user.name)?;
    Ok((
        token,
        PublicUser {
            name: user.name,
            email: user.email,
        },
    ))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
