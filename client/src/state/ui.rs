//! Transient UI chrome: toast notices and the auth modal.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Toast flavor, drives the notice color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Which auth form the modal shows, if open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthModal {
    #[default]
    Closed,
    Login,
    Signup,
}

impl AuthModal {
    /// A successful signup drops the user on the login form to sign in.
    #[must_use]
    pub fn after_signup_success(self) -> Self {
        Self::Login
    }
}
