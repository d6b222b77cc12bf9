//! Client for the upstream catalog and billing collaborators.
//!
//! All calls carry bounded timeouts. Failures are translated into the
//! application error taxonomy with the upstream status preserved where one
//! was received; no retries are performed.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::models::{AppError, AppResult, OrderPayload};

const CATALOG_TIMEOUT: Duration = Duration::from_secs(10);
const ITEMS_TIMEOUT: Duration = Duration::from_secs(15);
const BILLING_TIMEOUT: Duration = Duration::from_secs(15);

/// Billing API response, whatever its status. The caller decides what counts
/// as success.
#[derive(Debug)]
pub struct BillingReply {
    pub status: u16,
    pub body: Value,
}

pub struct UpstreamClient {
    client: Client,
    category_api_url: String,
    items_api_base: String,
    bill_api_url: String,
    bill_api_auth: Option<String>,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            category_api_url: config.category_api_url.clone(),
            items_api_base: config.items_api_base.clone(),
            bill_api_url: config.bill_api_url.clone(),
            bill_api_auth: config.bill_api_auth.clone(),
        }
    }

    /// Fetch the category list from the catalog API.
    pub async fn fetch_categories(&self) -> AppResult<Value> {
        let response = self
            .client
            .get(&self.category_api_url)
            .timeout(CATALOG_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "category API unreachable");
                AppError::Upstream {
                    status: None,
                    detail: format!("Failed to fetch categories: {e}"),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream {
                status: None,
                detail: format!("Failed to fetch categories: status {status}"),
            });
        }

        response.json().await.map_err(|e| AppError::Upstream {
            status: None,
            detail: format!("Failed to fetch categories: {e}"),
        })
    }

    /// Fetch the item list for a category. A non-success upstream status is
    /// forwarded to the caller (a missing category stays a 404).
    pub async fn fetch_items(&self, category: &str) -> AppResult<Value> {
        let url = format!("{}/{}", self.items_api_base, category);
        let response = self
            .client
            .get(&url)
            .timeout(ITEMS_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, category, "items API unreachable");
                AppError::Upstream {
                    status: None,
                    detail: format!("Failed to fetch items: {e}"),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status: Some(status.as_u16()),
                detail: format!("Items API error: {body}"),
            });
        }

        response.json().await.map_err(|e| AppError::Upstream {
            status: None,
            detail: format!("Failed to fetch items: {e}"),
        })
    }

    /// Submit an order to the billing API.
    ///
    /// Any HTTP response is returned as a [`BillingReply`]; only transport
    /// failures (unreachable, timeout) are errors here.
    pub async fn submit_order(&self, payload: &OrderPayload) -> AppResult<BillingReply> {
        let mut request = self
            .client
            .post(&self.bill_api_url)
            .timeout(BILLING_TIMEOUT)
            .json(payload);
        if let Some(token) = &self.bill_api_auth {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "billing API unreachable");
            AppError::Upstream {
                status: None,
                detail: format!("Failed to forward to billing API: {e}"),
            }
        })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.unwrap_or_default();
        // Forward the response body as JSON when it parses, raw text
        // otherwise.
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        Ok(BillingReply { status, body })
    }
}
