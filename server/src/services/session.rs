//! Stateless session tokens.
//!
//! ARCHITECTURE
//! ============
//! The service issues signed HS256 tokens and keeps no record of them: there
//! is no revocation and no server-side session table. A token stands on its
//! own until its one-hour expiry.

#[cfg(test)]
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use jsonwebtoken::{EncodingKey, Header};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

/// Tokens expire one hour after issuance.
pub const TOKEN_TTL: Duration = Duration::hours(1);

/// Signed token payload. `userId` keeps the wire name existing storefront
/// clients already decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// Holds the HS256 key pair derived from the configured signing secret.
/// The decoding half exists for test verification only — the API itself
/// never consumes a token.
pub struct TokenSigner {
    encoding: EncodingKey,
    #[cfg(test)]
    decoding: DecodingKey,
}

impl TokenSigner {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            #[cfg(test)]
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for the given user, expiring [`TOKEN_TTL`] from now.
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails.
    pub fn issue(&self, user_id: i64, name: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user_id, name, OffsetDateTime::now_utc())
    }

    pub(crate) fn issue_at(
        &self,
        user_id: i64,
        name: &str,
        now: OffsetDateTime,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = now.unix_timestamp();
        let claims = Claims {
            user_id,
            name: name.to_owned(),
            iat,
            exp: iat + TOKEN_TTL.whole_seconds(),
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
    }

    /// Decode and validate a token, rejecting bad signatures and expiry.
    ///
    /// # Errors
    ///
    /// Returns an error if the signature does not verify or the token has
    /// expired.
    #[cfg(test)]
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))?;
        Ok(data.claims)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
