//! Auth routes — signup and login handlers.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a status code plus a `{message}` body the storefront
//! shows inline. Client-correctable errors carry their own display string;
//! infrastructure failures are logged here and collapse to a generic 500 so
//! store-file details never leak to the caller.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use wire::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};

use crate::services::auth::{self, AuthError};
use crate::state::AppState;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

pub(crate) fn auth_error_to_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::Validation => StatusCode::BAD_REQUEST,
        AuthError::Conflict => StatusCode::CONFLICT,
        AuthError::NotFound => StatusCode::NOT_FOUND,
        AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
        AuthError::Store(_) | AuthError::Hash(_) | AuthError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn auth_error_body(err: &AuthError) -> MessageResponse {
    let message = match err {
        AuthError::Store(_) | AuthError::Hash(_) | AuthError::Token(_) => GENERIC_FAILURE.to_owned(),
        client_facing => client_facing.to_string(),
    };
    MessageResponse { message }
}

fn reject(err: &AuthError) -> (StatusCode, Json<MessageResponse>) {
    if auth_error_to_status(err) == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "auth request failed");
    }
    (auth_error_to_status(err), Json(auth_error_body(err)))
}

/// `POST /signup` — register a new user. 201 on success.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), (StatusCode, Json<MessageResponse>)> {
    match auth::register(state.store.as_ref(), state.bcrypt_cost, &req.name, &req.email, &req.password).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "User registered successfully. You can now log in.".to_owned(),
            }),
        )),
        Err(err) => Err(reject(&err)),
    }
}

/// `POST /login` — authenticate and return a one-hour bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<MessageResponse>)> {
    match auth::authenticate(state.store.as_ref(), &state.signer, &req.email, &req.password).await {
        Ok((token, user)) => Ok(Json(LoginResponse {
            message: "Logged in successfully.".to_owned(),
            token,
            user,
        })),
        Err(err) => Err(reject(&err)),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
