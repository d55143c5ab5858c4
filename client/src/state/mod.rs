//! Storefront state: session, cart, and UI chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one slice of state as plain data with named transition
//! functions returning the new state; rendering consumes view descriptions
//! derived from it.

pub mod cart;
pub mod session;
pub mod ui;
