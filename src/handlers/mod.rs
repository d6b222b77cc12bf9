pub mod cart_handlers;
pub mod catalog_handlers;
pub mod checkout_handlers;
pub mod session_handlers;

use std::sync::Arc;

use crate::services::{SessionStore, UpstreamClient};

pub type AppState = Arc<AppStateInner>;

#[derive(Clone)]
pub struct AppStateInner {
    pub store: Arc<SessionStore>,
    pub upstream: Arc<UpstreamClient>,
}
