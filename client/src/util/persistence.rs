//! Browser localStorage helpers for the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the web-sys glue so session code stays pure. The token is
//! stored as a raw string and the profile as JSON, under the keys in
//! `state::session`. Outside the browser everything is a no-op.

use wire::PublicUser;

use crate::state::session::{SessionState, TOKEN_STORAGE_KEY, USER_STORAGE_KEY};

/// Read a raw string from `localStorage`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string to `localStorage`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a key from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Read the persisted token and profile for `state::session::check_on_load`.
#[must_use]
pub fn load_session() -> (Option<String>, Option<PublicUser>) {
    let token = load_string(TOKEN_STORAGE_KEY);
    let user = load_string(USER_STORAGE_KEY).and_then(|raw| serde_json::from_str(&raw).ok());
    (token, user)
}

/// Persist a freshly logged-in session.
pub fn save_session(state: &SessionState) {
    if let (Some(token), Some(user)) = (&state.token, &state.user) {
        save_string(TOKEN_STORAGE_KEY, token);
        if let Ok(raw) = serde_json::to_string(user) {
            save_string(USER_STORAGE_KEY, &raw);
        }
    }
}

/// Drop the persisted session on logout.
pub fn clear_session() {
    remove(TOKEN_STORAGE_KEY);
    remove(USER_STORAGE_KEY);
}
