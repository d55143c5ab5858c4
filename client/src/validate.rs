//! Signup form validation and the password strength meter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every check runs client-side before any network call; each failure maps
//! to the inline error slot under its form field. The server re-checks only
//! that fields are non-empty, so these rules are UX, not a security boundary.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Per-field signup errors, one slot per form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm: Option<&'static str>,
}

impl SignupErrors {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.confirm.is_none()
    }
}

/// Validate the signup form. All four checks run independently so every
/// broken field shows its message at once.
#[must_use]
pub fn validate_signup(name: &str, email: &str, password: &str, confirm: &str) -> SignupErrors {
    let mut errors = SignupErrors::default();
    if name.is_empty() {
        errors.name = Some("Name is required.");
    }
    if !email_is_plausible(email) {
        errors.email = Some("Please enter a valid email.");
    }
    if password.chars().count() < 8 {
        errors.password = Some("Password must be at least 8 characters.");
    }
    if password != confirm {
        errors.confirm = Some("Passwords do not match.");
    }
    errors
}

/// Validate the login form before any network call. The login form has a
/// single shared error slot, so one message covers both fields.
#[must_use]
pub fn validate_login(email: &str, password: &str) -> Option<&'static str> {
    if email.is_empty() || password.is_empty() {
        return Some("Please fill in all fields.");
    }
    None
}

/// Shape check only: no whitespace, something before `@`, and a dot with
/// characters on both sides in the domain part.
#[must_use]
pub fn email_is_plausible(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Strength score 0–4: length over seven, mixed case, a digit, a symbol.
#[must_use]
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() > 7 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) && password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

/// Meter bucket for the strength bar color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Strong,
}

#[must_use]
pub fn strength_level(score: u8) -> StrengthLevel {
    match score {
        0 | 1 => StrengthLevel::Weak,
        2 | 3 => StrengthLevel::Fair,
        _ => StrengthLevel::Strong,
    }
}

/// Bar width as a percentage of the full meter.
#[must_use]
pub fn strength_percent(score: u8) -> u8 {
    score.min(4) * 25
}
