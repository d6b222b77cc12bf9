//! Pure cart operations. No I/O and no locking; callers mutate a session's
//! cart while holding that session's lock.

use crate::models::{CartSummary, LineItem, RemoveOutcome, SummaryLine};

/// Add an item to the cart, merging into an existing line when the name
/// matches case-insensitively. A merge increments the quantity and overwrites
/// the unit price with the latest call's price; the subtotal is recomputed
/// either way.
pub fn add_item(cart: &mut Vec<LineItem>, name: &str, price: f64, qty: u32) {
    for item in cart.iter_mut() {
        if item.name.eq_ignore_ascii_case(name) {
            item.qty += qty;
            item.price = price;
            item.subtotal = item.price * f64::from(item.qty);
            return;
        }
    }
    cart.push(LineItem::new(name.to_string(), price, qty));
}

/// Remove an item or reduce its quantity, matching case-insensitively.
///
/// Removes the whole line when the stored quantity is at most `qty`,
/// decrements it otherwise, and leaves the cart untouched when no line
/// matches.
pub fn remove_item(cart: &mut Vec<LineItem>, name: &str, qty: u32) -> RemoveOutcome {
    let Some(pos) = cart
        .iter()
        .position(|item| item.name.eq_ignore_ascii_case(name))
    else {
        return RemoveOutcome::NotFound;
    };

    if cart[pos].qty <= qty {
        cart.remove(pos);
        RemoveOutcome::Removed
    } else {
        let item = &mut cart[pos];
        item.qty -= qty;
        item.subtotal = item.price * f64::from(item.qty);
        RemoveOutcome::Reduced
    }
}

/// Project the cart into summary rows plus a grand total.
pub fn summarize(cart: &[LineItem]) -> CartSummary {
    let lines = cart
        .iter()
        .map(|item| SummaryLine {
            name: item.name.clone(),
            qty: item.qty,
            rate: item.price,
            amount: item.subtotal,
        })
        .collect();
    let total = cart.iter().map(|item| item.subtotal).sum();

    CartSummary { lines, total }
}
