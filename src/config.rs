//! Environment-driven configuration with the service's shipped defaults.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub category_api_url: String,
    pub items_api_base: String,
    pub bill_api_url: String,
    /// Optional bearer token attached to billing submissions.
    pub bill_api_auth: Option<String>,
    /// Comma-separated allowed origins, or "*".
    pub cors_origins: String,
    /// Idle window before a session is auto-removed.
    pub auto_logout_secs: u64,
    /// Deletion window after a successful checkout.
    pub checkout_grace_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:3000"),
            category_api_url: env_or(
                "CATEGORY_API_URL",
                "https://pos-backend-nine-pied.vercel.app/api/categories/list",
            ),
            items_api_base: env_or(
                "ITEMS_API_BASE",
                "https://pos-backend-nine-pied.vercel.app/api/item-details/category",
            ),
            bill_api_url: env_or(
                "BILL_API_URL",
                "https://pos-backend-nine-pied.vercel.app/api/bookings",
            ),
            bill_api_auth: env::var("BILL_API_AUTH").ok().filter(|v| !v.is_empty()),
            cors_origins: env_or("CORS_ORIGINS", "*"),
            auto_logout_secs: env_secs("AUTO_LOGOUT_SECONDS", 1800),
            checkout_grace_secs: env_secs("CHECKOUT_GRACE_SECONDS", 30),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_secs(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
