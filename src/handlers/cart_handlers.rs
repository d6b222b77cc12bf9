use axum::{
    Json,
    extract::{Query, State},
};

use crate::handlers::AppState;
use crate::models::{
    AppError, AppResult, CartAddRequest, CartRemoveRequest, CartRemoveResponse, CartResponse,
    CartViewParams, CartViewResponse, RemoveOutcome, RemoveResult,
};
use crate::services::cart;
use crate::utils::validation;

/// Add an item to the session cart
#[utoipa::path(
    post,
    path = "/cart/add",
    request_body = CartAddRequest,
    responses(
        (status = 200, description = "Item added", body = CartResponse),
        (status = 400, description = "Invalid price"),
        (status = 404, description = "Session not found")
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(request): Json<CartAddRequest>,
) -> AppResult<Json<CartResponse>> {
    validation::validate_price(request.price)?;

    let session = state
        .store
        .get(&request.session_id)
        .ok_or(AppError::SessionNotFound)?;
    let mut session = session.lock().await;

    cart::add_item(
        &mut session.cart,
        &request.item_name,
        request.price,
        request.qty,
    );
    let summary = cart::summarize(&session.cart);

    Ok(Json(CartResponse {
        success: true,
        cart: session.cart.clone(),
        summary,
    }))
}

/// Remove an item from the session cart or reduce its quantity
#[utoipa::path(
    post,
    path = "/cart/remove",
    request_body = CartRemoveRequest,
    responses(
        (status = 200, description = "Removal outcome with updated cart", body = CartRemoveResponse),
        (status = 404, description = "Session not found")
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Json(request): Json<CartRemoveRequest>,
) -> AppResult<Json<CartRemoveResponse>> {
    let session = state
        .store
        .get(&request.session_id)
        .ok_or(AppError::SessionNotFound)?;
    let mut session = session.lock().await;

    let outcome = cart::remove_item(&mut session.cart, &request.item_name, request.qty);
    let (success, message) = match outcome {
        RemoveOutcome::Removed => (true, format!("Removed {} from cart.", request.item_name)),
        RemoveOutcome::Reduced => (
            true,
            format!("Reduced {} quantity by {}.", request.item_name, request.qty),
        ),
        RemoveOutcome::NotFound => (
            false,
            format!("Item '{}' not present in cart.", request.item_name),
        ),
    };
    let summary = cart::summarize(&session.cart);

    Ok(Json(CartRemoveResponse {
        result: RemoveResult {
            outcome,
            success,
            message,
        },
        cart: session.cart.clone(),
        summary,
    }))
}

/// View the cart and user info for a session
#[utoipa::path(
    get,
    path = "/cart/view",
    params(CartViewParams),
    responses(
        (status = 200, description = "Cart contents with summary", body = CartViewResponse),
        (status = 404, description = "Session not found")
    ),
    tag = "Cart"
)]
pub async fn view_cart(
    State(state): State<AppState>,
    Query(params): Query<CartViewParams>,
) -> AppResult<Json<CartViewResponse>> {
    let session = state
        .store
        .get(&params.session_id)
        .ok_or(AppError::SessionNotFound)?;
    let session = session.lock().await;

    let summary = cart::summarize(&session.cart);
    Ok(Json(CartViewResponse {
        user: session.user.clone(),
        cart: session.cart.clone(),
        summary,
    }))
}
