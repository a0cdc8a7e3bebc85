//! Cart persistence and checkout sequencing.
//!
//! The cart is client-only state: a serialized array under one storage
//! key, rewritten wholesale on every change. It first touches the backend
//! at checkout, which is a strict two-phase sequence — create the order,
//! then pay it — and the cart survives any failure along the way.

use async_trait::async_trait;

use camwatch_shared::cart::{self, CartItem};
use camwatch_shared::{CreateOrderRequest, Order, PaymentRequest};

use crate::api::{ApiResult, CamWatchApi};
use crate::web::StringStore;

const CART_KEY: &str = "cart";

/// Cart repository over a swappable key-value store.
pub struct CartStore<S: StringStore> {
    store: S,
}

impl<S: StringStore> CartStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// An absent or undecodable stored value reads as an empty cart.
    pub fn load(&self) -> Vec<CartItem> {
        self.store
            .get(CART_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&self, items: &[CartItem]) {
        if let Ok(json) = serde_json::to_string(items) {
            self.store.set(CART_KEY, &json);
        }
    }

    pub fn clear(&self) {
        self.store.remove(CART_KEY);
    }

    fn mutate(&self, f: impl FnOnce(&mut Vec<CartItem>)) -> Vec<CartItem> {
        let mut items = self.load();
        f(&mut items);
        self.save(&items);
        items
    }

    pub fn add(&self, item: CartItem) -> Vec<CartItem> {
        self.mutate(|items| cart::add(items, item))
    }

    pub fn increment(&self, product_id: &str) -> Vec<CartItem> {
        self.mutate(|items| cart::increment(items, product_id))
    }

    pub fn decrement(&self, product_id: &str) -> Vec<CartItem> {
        self.mutate(|items| cart::decrement(items, product_id))
    }

    pub fn remove(&self, product_id: &str) -> Vec<CartItem> {
        self.mutate(|items| cart::remove(items, product_id))
    }
}

/// The backend surface checkout needs; a seam so tests can inject
/// failures at either phase.
#[async_trait(?Send)]
pub trait CheckoutBackend {
    async fn create_order(&self, req: &CreateOrderRequest) -> ApiResult<Order>;
    async fn submit_payment(&self, req: &PaymentRequest) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl CheckoutBackend for CamWatchApi {
    async fn create_order(&self, req: &CreateOrderRequest) -> ApiResult<Order> {
        CamWatchApi::create_order(self, req).await
    }

    async fn submit_payment(&self, req: &PaymentRequest) -> ApiResult<()> {
        self.checkout_payment(req).await
    }
}

/// Two-phase checkout.
///
/// 1. Create the order from the cart lines and address.
/// 2. Only if that succeeded, submit payment for the order id and total.
///
/// The cart is cleared after both phases succeed, and only then. An
/// order-creation failure never reaches the payment call; a payment
/// failure leaves the created order to the backend's own bookkeeping
/// and the cart intact for retry.
pub async fn place_order<S, B>(
    backend: &B,
    cart_store: &CartStore<S>,
    address: String,
) -> Result<Order, String>
where
    S: StringStore,
    B: CheckoutBackend,
{
    let items = cart_store.load();
    if items.is_empty() {
        return Err("Your cart is empty".to_string());
    }

    let totals = cart::totals(&items);
    let order = backend
        .create_order(&CreateOrderRequest {
            items: cart::order_lines(&items),
            address,
        })
        .await
        .map_err(|e| format!("Order could not be created: {}", e))?;

    backend
        .submit_payment(&PaymentRequest {
            order_id: Some(order.id.clone()),
            amount: totals.total,
        })
        .await
        .map_err(|e| format!("Payment failed: {}", e))?;

    cart_store.clear();
    Ok(order)
}

#[cfg(test)]
mod tests;
