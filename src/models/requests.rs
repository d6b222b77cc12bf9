use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::session::{CartSummary, LineItem, RemoveOutcome, UserProfile};

fn default_qty() -> u32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SessionCreateRequest {
    pub name: String,
    /// 10-digit subscriber number without country code, e.g. 3001234567.
    pub mobile: String,
    pub address: String,
    #[serde(default)]
    pub country_code: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionCreateResponse {
    pub session_id: String,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CartAddRequest {
    pub session_id: String,
    #[serde(rename = "itemName")]
    pub item_name: String,
    pub price: f64,
    #[serde(default = "default_qty")]
    pub qty: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    pub success: bool,
    pub cart: Vec<LineItem>,
    pub summary: CartSummary,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CartRemoveRequest {
    pub session_id: String,
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(default = "default_qty")]
    pub qty: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemoveResult {
    pub outcome: RemoveOutcome,
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartRemoveResponse {
    pub result: RemoveResult,
    pub cart: Vec<LineItem>,
    pub summary: CartSummary,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CartViewParams {
    pub session_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartViewResponse {
    pub user: UserProfile,
    pub cart: Vec<LineItem>,
    pub summary: CartSummary,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub session_id: String,
    /// e.g. "Cash on Delivery" or "Online Transfer".
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub success: bool,
    pub message: String,
    pub bill_api_status: u16,
    pub payload_sent: OrderPayload,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SessionResetRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResetResponse {
    pub reset: bool,
}

/// Line item as expected by the billing API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item_name: String,
    pub qty: u32,
    pub rate: f64,
    pub amount: f64,
}

/// Order contract of the billing API. Built fresh on every checkout attempt.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub customer_name: String,
    pub mobile_no: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub payment_method: String,
}
