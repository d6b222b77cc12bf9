use axum::{Json, extract::State};

use crate::handlers::AppState;
use crate::models::{
    AppResult, SessionCreateRequest, SessionCreateResponse, SessionResetRequest,
    SessionResetResponse, UserProfile,
};
use crate::utils::validation;

/// Create a new session for the user after validating the profile
#[utoipa::path(
    post,
    path = "/session/create",
    request_body = SessionCreateRequest,
    responses(
        (status = 200, description = "Session created", body = SessionCreateResponse),
        (status = 400, description = "Invalid profile")
    ),
    tag = "Session"
)]
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<SessionCreateRequest>,
) -> AppResult<Json<SessionCreateResponse>> {
    let name = request.name.trim();
    let mobile = request.mobile.trim();
    let address = request.address.trim();
    let country_code = request.country_code.as_deref().unwrap_or("+92");

    validation::validate_name(name)?;
    validation::validate_mobile(mobile)?;
    validation::validate_address(address)?;

    let user = UserProfile {
        name: name.to_string(),
        mobile: format!("{country_code}{mobile}"),
        address: address.to_string(),
    };
    let session_id = state.store.create(user.clone());

    Ok(Json(SessionCreateResponse { session_id, user }))
}

/// Clear a session (logout)
#[utoipa::path(
    post,
    path = "/session/reset",
    request_body = SessionResetRequest,
    responses(
        (status = 200, description = "Reports whether a session was removed", body = SessionResetResponse)
    ),
    tag = "Session"
)]
pub async fn reset_session(
    State(state): State<AppState>,
    Json(request): Json<SessionResetRequest>,
) -> Json<SessionResetResponse> {
    let reset = state.store.remove(&request.session_id);
    if reset {
        tracing::info!(session_id = %request.session_id, "session reset");
    }
    Json(SessionResetResponse { reset })
}
