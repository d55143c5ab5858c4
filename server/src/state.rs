//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! service is stateless per request: the only shared pieces are the
//! repository handle, the token signer, and the bcrypt work factor.

use std::sync::Arc;

use crate::services::session::TokenSigner;
use crate::store::UserRepository;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserRepository>,
    pub signer: Arc<TokenSigner>,
    pub bcrypt_cost: u32,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn UserRepository>, signer: TokenSigner, bcrypt_cost: u32) -> Self {
        Self {
            store,
            signer: Arc::new(signer),
            bcrypt_cost,
        }
    }
}
