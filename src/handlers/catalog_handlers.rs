use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::handlers::AppState;
use crate::models::AppResult;

/// Proxy the upstream category list
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category list from the catalog API"),
        (status = 502, description = "Catalog API unreachable or failed")
    ),
    tag = "Catalog"
)]
pub async fn get_categories(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let categories = state.upstream.fetch_categories().await?;
    Ok(Json(categories))
}

/// Proxy the upstream item list for a category
#[utoipa::path(
    get,
    path = "/items/{category}",
    params(
        ("category" = String, Path, description = "Category name")
    ),
    responses(
        (status = 200, description = "Item list for the category"),
        (status = 404, description = "Category not known upstream"),
        (status = 502, description = "Items API unreachable or failed")
    ),
    tag = "Catalog"
)]
pub async fn get_items(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Value>> {
    let items = state.upstream.fetch_items(&category).await?;
    Ok(Json(items))
}
