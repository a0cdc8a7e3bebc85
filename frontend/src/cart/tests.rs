use super::*;
use async_trait::async_trait;

use crate::api::ApiError;
use crate::web::MemoryStore;
use camwatch_shared::OrderStatus;
use camwatch_shared::cart::CartItem;
use std::cell::RefCell;

// =========================================================
// Mock checkout backend
// =========================================================

struct MockBackend {
    /// Call log, to verify sequencing.
    log: RefCell<Vec<String>>,
    fail_order: bool,
    fail_payment: bool,
}

impl MockBackend {
    fn new() -> Self {
        Self {
            log: RefCell::new(Vec::new()),
            fail_order: false,
            fail_payment: false,
        }
    }

    fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

#[async_trait(?Send)]
impl CheckoutBackend for MockBackend {
    async fn create_order(&self, req: &CreateOrderRequest) -> ApiResult<Order> {
        self.log.borrow_mut().push("create_order".to_string());
        if self.fail_order {
            return Err(ApiError::Status(500));
        }
        Ok(Order {
            id: "order-1".to_string(),
            items: req.items.clone(),
            address: req.address.clone(),
            total: 0.0,
            status: OrderStatus::Pending,
            created_at: chrono::Utc::now(),
        })
    }

    async fn submit_payment(&self, req: &PaymentRequest) -> ApiResult<()> {
        self.log
            .borrow_mut()
            .push(format!("payment:{}:{}", req.order_id.as_deref().unwrap_or("-"), req.amount));
        if self.fail_payment {
            return Err(ApiError::Status(402));
        }
        Ok(())
    }
}

fn item(id: &str, price: f64, qty: u32) -> CartItem {
    CartItem {
        product_id: id.to_string(),
        name: format!("product {id}"),
        price,
        qty,
        image: None,
    }
}

fn seeded_store() -> CartStore<MemoryStore> {
    let store = CartStore::new(MemoryStore::default());
    store.add(item("a", 10.0, 2));
    store.add(item("b", 5.0, 1));
    store
}

// =========================================================
// Repository behavior
// =========================================================

#[test]
fn load_of_missing_or_corrupt_value_is_an_empty_cart() {
    let backing = MemoryStore::default();
    backing.set("cart", "{definitely not json");
    let store = CartStore::new(backing);
    assert!(store.load().is_empty());
}

#[test]
fn add_persists_merged_lines() {
    let store = CartStore::new(MemoryStore::default());
    store.add(item("a", 10.0, 1));
    let items = store.add(item("a", 10.0, 1));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].qty, 2);
    // A fresh read from the backing store sees the same state.
    assert_eq!(store.load(), items);
}

#[test]
fn decrement_through_the_store_clamps_at_one() {
    let store = CartStore::new(MemoryStore::default());
    store.add(item("a", 10.0, 1));
    let items = store.decrement("a");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].qty, 1);
}

#[test]
fn remove_drops_only_the_target_line() {
    let store = seeded_store();
    let items = store.remove("a");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, "b");
}

// =========================================================
// Checkout sequencing
// =========================================================

#[tokio::test]
async fn successful_checkout_orders_then_pays_then_clears() {
    let store = seeded_store();
    let backend = MockBackend::new();

    let order = place_order(&backend, &store, "1 Main St".to_string())
        .await
        .expect("checkout should succeed");

    assert_eq!(order.id, "order-1");
    // subtotal 25.00, tax 1.75, total 26.75
    assert_eq!(backend.calls(), vec!["create_order", "payment:order-1:26.75"]);
    assert!(store.load().is_empty());
}

#[tokio::test]
async fn order_failure_skips_payment_and_keeps_cart() {
    let store = seeded_store();
    let backend = MockBackend {
        fail_order: true,
        ..MockBackend::new()
    };

    let err = place_order(&backend, &store, "1 Main St".to_string())
        .await
        .expect_err("checkout should fail");

    assert!(err.contains("Order could not be created"));
    assert_eq!(backend.calls(), vec!["create_order"]);
    assert_eq!(store.load().len(), 2);
}

#[tokio::test]
async fn payment_failure_keeps_cart() {
    let store = seeded_store();
    let backend = MockBackend {
        fail_payment: true,
        ..MockBackend::new()
    };

    let err = place_order(&backend, &store, "1 Main St".to_string())
        .await
        .expect_err("checkout should fail");

    assert!(err.contains("Payment failed"));
    assert_eq!(backend.calls(), vec!["create_order", "payment:order-1:26.75"]);
    assert_eq!(store.load().len(), 2);
}

#[tokio::test]
async fn empty_cart_never_reaches_the_backend() {
    let store = CartStore::new(MemoryStore::default());
    let backend = MockBackend::new();

    let err = place_order(&backend, &store, "1 Main St".to_string())
        .await
        .expect_err("empty cart cannot be checked out");

    assert!(err.contains("empty"));
    assert!(backend.calls().is_empty());
}
