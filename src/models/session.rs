use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub name: String,
    /// Normalized mobile number including the country code prefix.
    pub mobile: String,
    pub address: String,
}

/// One named product entry in a cart. `subtotal` is always `price * qty`,
/// recomputed on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    pub qty: u32,
    pub subtotal: f64,
}

impl LineItem {
    pub fn new(name: String, price: f64, qty: u32) -> Self {
        Self {
            name,
            price,
            qty,
            subtotal: price * f64::from(qty),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SummaryLine {
    pub name: String,
    pub qty: u32,
    pub rate: f64,
    pub amount: f64,
}

/// Derived projection of a cart, recomputed on demand and never cached.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartSummary {
    pub lines: Vec<SummaryLine>,
    pub total: f64,
}

/// Result of a cart removal. Callers must distinguish all three outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RemoveOutcome {
    Removed,
    Reduced,
    NotFound,
}

/// Server-side session record, exclusively owned by the session store.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub user: UserProfile,
    pub cart: Vec<LineItem>,
    pub categories: Option<serde_json::Value>,
    pub selected_category: Option<String>,
    /// Expiry timer generation. Bumped on every reschedule so superseded
    /// timers become no-ops.
    pub(crate) expiry_epoch: u64,
}

impl Session {
    pub fn new(user: UserProfile) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            user,
            cart: Vec::new(),
            categories: None,
            selected_category: None,
            expiry_epoch: 0,
        }
    }
}
