//! Cart state and the checkout gate.
//!
//! DESIGN
//! ======
//! The cart is an explicit value passed to rendering, not an ambient global.
//! Every mutation goes through a named operation returning the new state, so
//! the sidebar re-renders from whatever the operation hands back.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::catalog::{Product, format_inr};
use crate::state::session::SessionState;
use crate::state::ui::Notice;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Add one of `product`, stacking onto an existing line.
    #[must_use]
    pub fn add(mut self, product: &Product) -> Self {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            });
        }
        self
    }

    /// Set a line's quantity; zero removes the line.
    #[must_use]
    pub fn update_quantity(mut self, product_id: u32, quantity: u32) -> Self {
        if quantity == 0 {
            return self.remove(product_id);
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
        self
    }

    #[must_use]
    pub fn remove(mut self, product_id: u32) -> Self {
        self.items.retain(|i| i.product.id != product_id);
        self
    }

    /// Total unit count shown on the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cart total in whole rupees.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.items.iter().map(|i| i.product.price * u64::from(i.quantity)).sum()
    }
}

/// One rendered cart row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    pub quantity: u32,
    /// Line total (price × quantity), formatted for display.
    pub line_total_display: String,
}

/// View description for the cart sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub total_display: String,
}

#[must_use]
pub fn cart_view(cart: &CartState) -> CartView {
    CartView {
        lines: cart
            .items
            .iter()
            .map(|i| CartLine {
                product_id: i.product.id,
                name: i.product.name.clone(),
                quantity: i.quantity,
                line_total_display: format_inr(i.product.price * u64::from(i.quantity)),
            })
            .collect(),
        item_count: cart.item_count(),
        total_display: format_inr(cart.total()),
    }
}

/// Outcome of pressing checkout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutGate {
    /// No token present: block and prompt login.
    NeedsLogin,
    EmptyCart,
    Ready,
}

/// Gate checkout on token presence only. This is a UI gate, not a security
/// boundary — the token is never validated here and no checkout endpoint
/// exists server-side.
#[must_use]
pub fn checkout_gate(session: &SessionState, cart: &CartState) -> CheckoutGate {
    if !session.is_logged_in() {
        return CheckoutGate::NeedsLogin;
    }
    if cart.items.is_empty() {
        return CheckoutGate::EmptyCart;
    }
    CheckoutGate::Ready
}

/// Toast shown for each checkout outcome; every press of the button toasts.
#[must_use]
pub fn gate_notice(gate: CheckoutGate) -> Notice {
    match gate {
        CheckoutGate::NeedsLogin => Notice::error("Please log in to proceed to checkout."),
        CheckoutGate::EmptyCart => Notice::error("Your cart is empty."),
        CheckoutGate::Ready => Notice::success("Redirecting to checkout..."),
    }
}
