use axum::{Json, extract::State};

use crate::handlers::AppState;
use crate::models::{AppError, AppResult, CheckoutRequest, CheckoutResponse};
use crate::services::order;

/// Finalize the order and forward it to the billing API
///
/// On billing success the cart is cleared and the session switches onto the
/// short post-checkout deletion window. On any failure the session and cart
/// are left untouched so the user may retry.
#[utoipa::path(
    post,
    path = "/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order placed", body = CheckoutResponse),
        (status = 400, description = "Cart is empty"),
        (status = 404, description = "Session not found"),
        (status = 502, description = "Billing API failed or rejected the order")
    ),
    tag = "Checkout"
)]
pub async fn checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutResponse>> {
    let session = state
        .store
        .get(&request.session_id)
        .ok_or(AppError::SessionNotFound)?;

    // Snapshot the payload under the session lock, then release it for the
    // upstream call. The lock must not be held across the await.
    let payload = {
        let session = session.lock().await;
        order::assemble(&session, &request.payment_method)?
    };

    let reply = state.upstream.submit_order(&payload).await?;
    if reply.status != 200 && reply.status != 201 {
        return Err(AppError::Billing {
            status: reply.status,
            body: reply.body,
        });
    }

    // Re-validate: the session may have expired while the billing call was in
    // flight. The order went through either way; there is just no cart left
    // to clear.
    if let Some(session) = state.store.get(&request.session_id) {
        let mut session = session.lock().await;
        session.cart.clear();
        state.store.schedule_post_checkout(&mut session);
    }

    tracing::info!(
        session_id = %request.session_id,
        status = reply.status,
        total = payload.total,
        "order placed"
    );

    Ok(Json(CheckoutResponse {
        success: true,
        message: "Order placed".to_string(),
        bill_api_status: reply.status,
        payload_sent: payload,
    }))
}
