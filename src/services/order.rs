//! Builds the billing API payload from a session at checkout time.

use crate::models::{AppError, AppResult, OrderItem, OrderPayload, Session};

/// Assemble the billing payload for a session's cart.
///
/// Rejects an empty cart before any network call is made. The payload is
/// built fresh on every attempt and never persisted.
pub fn assemble(session: &Session, payment_method: &str) -> AppResult<OrderPayload> {
    if session.cart.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let items: Vec<OrderItem> = session
        .cart
        .iter()
        .map(|item| OrderItem {
            item_name: item.name.clone(),
            qty: item.qty,
            rate: item.price,
            amount: item.subtotal,
        })
        .collect();
    let total = items.iter().map(|item| item.amount).sum();

    Ok(OrderPayload {
        customer_name: session.user.name.clone(),
        mobile_no: session.user.mobile.clone(),
        address: session.user.address.clone(),
        items,
        total,
        payment_method: payment_method.to_string(),
    })
}
