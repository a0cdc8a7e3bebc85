//! Client-side shopping cart model and pricing arithmetic.
//!
//! The cart never exists on the backend: it lives in browser storage until
//! checkout turns it into an order. Everything here is pure so it can be
//! exercised natively, without a browser.

use serde::{Deserialize, Serialize};

use crate::{OrderLine, Product};

/// Flat sales tax applied at checkout.
pub const TAX_RATE: f64 = 0.07;

/// One cart line. `qty` never drops below 1; removing a line is an
/// explicit, separate operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub qty: u32,
    pub image: Option<String>,
}

impl CartItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            qty: 1,
            image: product.images.first().cloned(),
        }
    }

    pub fn line_total(&self) -> f64 {
        round2(self.price * self.qty as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Round to 2 decimals, the backend's currency precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `subtotal = Σ price·qty`, `tax = round2(subtotal · 0.07)`,
/// `total = round2(subtotal + tax)`.
pub fn totals(items: &[CartItem]) -> CartTotals {
    let subtotal = round2(items.iter().map(|i| i.price * i.qty as f64).sum());
    let tax = round2(subtotal * TAX_RATE);
    let total = round2(subtotal + tax);
    CartTotals {
        subtotal,
        tax,
        total,
    }
}

/// Merge an item into the cart: an existing line for the same product
/// gains the quantity, otherwise the item is appended.
pub fn add(items: &mut Vec<CartItem>, item: CartItem) {
    match items.iter_mut().find(|l| l.product_id == item.product_id) {
        Some(line) => line.qty += item.qty,
        None => items.push(item),
    }
}

pub fn increment(items: &mut [CartItem], product_id: &str) {
    if let Some(line) = items.iter_mut().find(|l| l.product_id == product_id) {
        line.qty += 1;
    }
}

/// Decrementing clamps at 1. It never removes the line; that is what
/// [`remove`] is for.
pub fn decrement(items: &mut [CartItem], product_id: &str) {
    if let Some(line) = items.iter_mut().find(|l| l.product_id == product_id) {
        line.qty = line.qty.saturating_sub(1).max(1);
    }
}

pub fn remove(items: &mut Vec<CartItem>, product_id: &str) {
    items.retain(|l| l.product_id != product_id);
}

/// Project cart lines into the order payload the backend expects.
pub fn order_lines(items: &[CartItem]) -> Vec<OrderLine> {
    items
        .iter()
        .map(|l| OrderLine {
            product_id: l.product_id.clone(),
            qty: l.qty,
        })
        .collect()
}

#[cfg(test)]
mod tests;
