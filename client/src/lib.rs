//! # client
//!
//! Browser-side logic for the vitrine storefront: session management, signup
//! validation, the cart, and catalog browsing.
//!
//! All state transitions and view descriptions are pure functions testable
//! without a browser. Actual DOM storage and HTTP glue live behind the
//! `hydrate` feature in `util::persistence` and `net::api`.

pub mod catalog;
pub mod net;
pub mod state;
pub mod util;
pub mod validate;
