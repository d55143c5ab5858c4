//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API surface is three routes: signup, login, and a plaintext liveness
//! line at the root. CORS admits exactly the configured storefront origin.

pub mod auth;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState, client_origin: &str) -> Router {
    let origin = client_origin.parse::<HeaderValue>().map_or_else(
        |_| {
            tracing::warn!(client_origin, "invalid CLIENT_ORIGIN, cross-origin calls will be refused");
            AllowOrigin::list(std::iter::empty::<HeaderValue>())
        },
        AllowOrigin::exact,
    );
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(liveness))
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn liveness() -> &'static str {
    "vitrine credential service is running"
}
