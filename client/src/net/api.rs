//! REST calls to the credential service.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Outside the browser the
//! functions return an error string so callers degrade without panicking.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as the server's `{message}` string (or a status-code
//! fallback when the body is unreadable) for inline display next to the
//! form. The client never retries; the user resubmits.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{LoginRequest, LoginResponse, SignupRequest};
#[cfg(any(test, feature = "hydrate"))]
use wire::MessageResponse;

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str) -> String {
    format!("{}/signup", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    format!("{}/login", base.trim_end_matches('/'))
}

/// Prefer the server-provided message; fall back to the bare status.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(body: Option<MessageResponse>, status: u16) -> String {
    body.map_or_else(|| format!("Request failed with status {status}."), |b| b.message)
}

/// `POST {base}/signup`. Returns the acknowledgment message on 201.
///
/// # Errors
///
/// The inline-displayable failure message.
pub async fn signup(base: &str, req: &SignupRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&signup_endpoint(base))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        if resp.ok() {
            resp.json::<MessageResponse>().await.map(|b| b.message).map_err(|e| e.to_string())
        } else {
            Err(failure_message(resp.json().await.ok(), status))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, req);
        Err("Network requests are only available in the browser.".to_owned())
    }
}

/// `POST {base}/login`. Returns the full response (message, token, user).
///
/// # Errors
///
/// The inline-displayable failure message.
pub async fn login(base: &str, req: &LoginRequest) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&login_endpoint(base))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        if resp.ok() {
            resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
        } else {
            Err(failure_message(resp.json().await.ok(), status))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, req);
        Err("Network requests are only available in the browser.".to_owned())
    }
}
