//! Product catalog: the static product list, search, and price formatting.
//!
//! DESIGN
//! ======
//! The catalog is fixed client-side data; filtering and search suggestions
//! are pure functions over it so the storefront grid can re-render from
//! their output without touching shared state.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Price in whole rupees.
    pub price: u64,
    pub description: String,
    pub category: String,
    pub image: String,
}

fn product(id: u32, name: &str, price: u64, description: &str, category: &str, image: &str) -> Product {
    Product {
        id,
        name: name.to_owned(),
        price,
        description: description.to_owned(),
        category: category.to_owned(),
        image: image.to_owned(),
    }
}

/// The storefront's catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Classic Leather Watch",
            24999,
            "Elegant timepiece with genuine leather strap",
            "watches",
            "https://images.unsplash.com/photo-1524592094714-0f0654e20314?auto=format&fit=crop&w=500&q=80",
        ),
        product(
            2,
            "Premium Fountain Pen",
            12499,
            "Handcrafted fountain pen with gold-plated nib",
            "accessories",
            "https://images.unsplash.com/photo-1583485088034-697b5bc54ccd?auto=format&fit=crop&w=500&q=80",
        ),
        product(
            3,
            "Leather Wallet",
            7499,
            "Full-grain leather bifold wallet",
            "leather",
            "https://images.unsplash.com/photo-1627123424574-724758594e93?auto=format&fit=crop&w=500&q=80",
        ),
        product(
            4,
            "Designer Sunglasses",
            9999,
            "Premium acetate frame sunglasses with UV protection",
            "accessories",
            "https://images.unsplash.com/photo-1572635196237-14b3f281503f?auto=format&fit=crop&w=500&q=80",
        ),
    ]
}

/// Filter by category button value; `"all"` returns everything.
#[must_use]
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| category == "all" || p.category == category).collect()
}

/// Case-insensitive search over name and description. An empty term yields
/// no suggestions (the dropdown stays closed).
#[must_use]
pub fn search_suggestions<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&term) || p.description.to_lowercase().contains(&term))
        .collect()
}

/// Look up a product by id (suggestion click-through).
#[must_use]
pub fn find_product(products: &[Product], id: u32) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

/// Indian-style digit grouping: `1234567` → `"12,34,567"`.
#[must_use]
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    // After the last group of three, digits pair off from the right.
    let mut groups = Vec::new();
    let mut idx = head.len();
    while idx > 2 {
        groups.push(&head[idx - 2..idx]);
        idx -= 2;
    }
    groups.push(&head[..idx]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
