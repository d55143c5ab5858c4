//! Auth-session state for the current browser user.
//!
//! DESIGN
//! ======
//! The client holds no server trust: a session is just a persisted bearer
//! token plus the public profile. Expiry is never checked here — an expired
//! token would only surface if a later server call rejected it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use wire::{LoginResponse, PublicUser};

use crate::state::ui::Notice;

/// Storage key holding the raw token string.
pub const TOKEN_STORAGE_KEY: &str = "token";
/// Storage key holding the serialized profile object.
pub const USER_STORAGE_KEY: &str = "user";

/// Session state; an absent token means logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<PublicUser>,
}

impl SessionState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// View description for the header auth slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthView {
    LoggedIn { name: String },
    LoggedOut,
}

/// Rebuild session state from persisted values on page load. Both pieces
/// must be present; a half-written session renders as logged out.
#[must_use]
pub fn check_on_load(token: Option<String>, user: Option<PublicUser>) -> SessionState {
    match (token, user) {
        (Some(token), Some(user)) => SessionState {
            token: Some(token),
            user: Some(user),
        },
        _ => SessionState::default(),
    }
}

/// Adopt a successful login response.
#[must_use]
pub fn apply_login(resp: LoginResponse) -> (SessionState, Notice) {
    let notice = Notice::success(resp.message);
    (
        SessionState {
            token: Some(resp.token),
            user: Some(resp.user),
        },
        notice,
    )
}

/// Clear the session and confirm with a transient notice.
#[must_use]
pub fn logout() -> (SessionState, Notice) {
    (SessionState::default(), Notice::success("You have been logged out."))
}

/// Map session state to the header view.
#[must_use]
pub fn auth_view(state: &SessionState) -> AuthView {
    match &state.user {
        Some(user) if state.token.is_some() => AuthView::LoggedIn { name: user.name.clone() },
        _ => AuthView::LoggedOut,
    }
}
