pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::handlers::{
    AppStateInner, cart_handlers, catalog_handlers, checkout_handlers, session_handlers,
};
use crate::services::{SessionStore, UpstreamClient};

#[derive(OpenApi)]
#[openapi(
    paths(
        session_handlers::create_session,
        session_handlers::reset_session,
        cart_handlers::add_to_cart,
        cart_handlers::remove_from_cart,
        cart_handlers::view_cart,
        catalog_handlers::get_categories,
        catalog_handlers::get_items,
        checkout_handlers::checkout,
    ),
    components(schemas(
        models::SessionCreateRequest,
        models::SessionCreateResponse,
        models::CartAddRequest,
        models::CartRemoveRequest,
        models::CartResponse,
        models::CartRemoveResponse,
        models::CartViewResponse,
        models::CheckoutRequest,
        models::CheckoutResponse,
        models::SessionResetRequest,
        models::SessionResetResponse,
        models::RemoveResult,
        models::RemoveOutcome,
        models::UserProfile,
        models::LineItem,
        models::SummaryLine,
        models::CartSummary,
        models::OrderItem,
        models::OrderPayload,
    )),
    tags(
        (name = "Session", description = "Session lifecycle"),
        (name = "Cart", description = "Cart operations"),
        (name = "Catalog", description = "Catalog proxy"),
        (name = "Checkout", description = "Order finalization")
    )
)]
pub struct ApiDoc;

/// Build the application router for the given configuration.
pub fn build_router(config: &Config) -> Router {
    let store = SessionStore::new(
        Duration::from_secs(config.auto_logout_secs),
        Duration::from_secs(config.checkout_grace_secs),
    );
    let upstream = Arc::new(UpstreamClient::new(config));
    let state = Arc::new(AppStateInner { store, upstream });

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/categories", get(catalog_handlers::get_categories))
        .route("/items/:category", get(catalog_handlers::get_items))
        .route("/session/create", post(session_handlers::create_session))
        .route("/session/reset", post(session_handlers::reset_session))
        .route("/cart/add", post(cart_handlers::add_to_cart))
        .route("/cart/remove", post(cart_handlers::remove_from_cart))
        .route("/cart/view", get(cart_handlers::view_cart))
        .route("/checkout", post(checkout_handlers::checkout))
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.trim() == "*" {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(parsed))
    }
}
