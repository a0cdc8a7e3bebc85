use super::*;
use crate::Product;

fn item(id: &str, price: f64, qty: u32) -> CartItem {
    CartItem {
        product_id: id.to_string(),
        name: format!("product {id}"),
        price,
        qty,
        image: None,
    }
}

#[test]
fn totals_match_seven_percent_tax() {
    let items = vec![item("a", 10.0, 2), item("b", 5.0, 1)];
    let t = totals(&items);
    assert_eq!(t.subtotal, 25.00);
    assert_eq!(t.tax, 1.75);
    assert_eq!(t.total, 26.75);
}

#[test]
fn totals_round_to_two_decimals() {
    // 3 × 0.10 accumulates float error; every figure must come out rounded.
    let items = vec![item("a", 0.10, 3)];
    let t = totals(&items);
    assert_eq!(t.subtotal, 0.30);
    assert_eq!(t.tax, 0.02);
    assert_eq!(t.total, 0.32);
}

#[test]
fn totals_of_empty_cart_are_zero() {
    let t = totals(&[]);
    assert_eq!(t.subtotal, 0.0);
    assert_eq!(t.tax, 0.0);
    assert_eq!(t.total, 0.0);
}

#[test]
fn add_merges_lines_by_product_id() {
    let mut items = vec![item("a", 10.0, 1)];
    add(&mut items, item("a", 10.0, 1));
    add(&mut items, item("b", 5.0, 2));
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].qty, 2);
    assert_eq!(items[1].qty, 2);
}

#[test]
fn decrement_clamps_at_one_and_keeps_the_line() {
    let mut items = vec![item("a", 10.0, 2)];
    decrement(&mut items, "a");
    assert_eq!(items[0].qty, 1);
    decrement(&mut items, "a");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].qty, 1);
}

#[test]
fn increment_and_remove_target_only_their_line() {
    let mut items = vec![item("a", 10.0, 1), item("b", 5.0, 1)];
    increment(&mut items, "b");
    assert_eq!(items[0].qty, 1);
    assert_eq!(items[1].qty, 2);
    remove(&mut items, "a");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, "b");
}

#[test]
fn line_total_uses_quantity() {
    assert_eq!(item("a", 19.99, 3).line_total(), 59.97);
}

#[test]
fn order_lines_carry_ids_and_quantities() {
    let items = vec![item("a", 10.0, 2), item("b", 5.0, 1)];
    let lines = order_lines(&items);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].product_id, "a");
    assert_eq!(lines[0].qty, 2);
    assert_eq!(lines[1].qty, 1);
}

#[test]
fn from_product_starts_at_quantity_one() {
    let product = Product {
        id: "p1".to_string(),
        name: "Dome Camera".to_string(),
        description: String::new(),
        category: "cameras".to_string(),
        price: 129.99,
        stock: 4,
        images: vec!["dome.jpg".to_string()],
    };
    let line = CartItem::from_product(&product);
    assert_eq!(line.qty, 1);
    assert_eq!(line.image.as_deref(), Some("dome.jpg"));
    assert_eq!(line.price, 129.99);
}
