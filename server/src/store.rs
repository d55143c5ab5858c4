//! File-backed user store.
//!
//! DESIGN
//! ======
//! The system of record is a single JSON array of user records, read in full
//! on every request and rewritten in full on signup. The repository trait
//! keeps service logic independent of that choice, so a transactional store
//! could replace [`FileStore`] without touching `services::auth`.
//!
//! TRADE-OFFS
//! ==========
//! There is no cross-request locking. Two signups racing on the same email
//! can both pass the duplicate check before either write lands, permitting a
//! rare duplicate record. Accepted at demo scale; not to be fixed here.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
#[cfg(test)]
use tokio::sync::RwLock;

/// A stored user record. `passwordHash` keeps the on-disk field name used by
/// earlier deployments of the storefront.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Millisecond creation timestamp, doubling as a unique, monotonic id.
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(rename = "passwordHash")]
    pub password_hash: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read user store: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write user store: {0}")]
    Write(#[source] std::io::Error),
    #[error("user store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Repository seam over the user list.
///
/// `find_by_email` and `insert` are derived from the wholesale load/save
/// pair, mirroring how the flat file is actually accessed.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<User>, StoreError>;
    async fn save_all(&self, users: &[User]) -> Result<(), StoreError>;

    /// Emails are compared case-sensitively, exactly as stored.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.load_all().await?.into_iter().find(|u| u.email == email))
    }

    /// Append a record and rewrite the store. A same-millisecond signup would
    /// collide on the timestamp id, so the id is bumped past the current max.
    async fn insert(&self, mut user: User) -> Result<(), StoreError> {
        let mut users = self.load_all().await?;
        if let Some(max_id) = users.iter().map(|u| u.id).max() {
            if user.id <= max_id {
                user.id = max_id + 1;
            }
        }
        users.push(user);
        self.save_all(&users).await
    }
}

/// The production store: one JSON document at a fixed path.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl UserRepository for FileStore {
    /// A missing file is an empty store, so first boot needs no setup step.
    async fn load_all(&self) -> Result<Vec<User>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Read(e)),
        };
        Ok(serde_json::from_slice(&raw)?)
    }

    async fn save_all(&self, users: &[User]) -> Result<(), StoreError> {
        let raw = serde_json::to_vec_pretty(users)?;
        tokio::fs::write(&self.path, raw).await.map_err(StoreError::Write)
    }
}

/// In-memory store used by service tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemStore {
    users: RwLock<Vec<User>>,
}

#[cfg(test)]
#[async_trait]
impl UserRepository for MemStore {
    async fn load_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn save_all(&self, users: &[User]) -> Result<(), StoreError> {
        *self.users.write().await = users.to_vec();
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
