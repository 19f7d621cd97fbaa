use axum::{extract::State, http::StatusCode, Json};

use crate::error::ApiError;
use crate::models::{LoginRequest, SignupRequest, UserProfile};
use crate::state::AppState;

/// Log in. Credentials are never checked in the demo; any email gets the
/// fixed demo identity.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    let mut session = state.session.lock().await;
    let profile = session.login(&req.email, &req.password)?;
    tracing::info!("Logged in as {}", profile.email);
    Ok((StatusCode::OK, Json(profile)))
}

/// Sign up a new demo identity with a generated account number.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    let mut session = state.session.lock().await;
    let profile = session.signup(&req.name, &req.email, &req.password)?;
    tracing::info!("Signed up {} ({})", profile.email, profile.account_number);
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Log out: clears the profile and removes the persisted copy.
pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let mut session = state.session.lock().await;
    session.logout()?;
    Ok(StatusCode::NO_CONTENT)
}

/// Current user, if a session exists.
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    let profile = require_login(&state).await?;
    Ok((StatusCode::OK, Json(profile)))
}

/// Validate that somebody is logged in and return their profile.
pub async fn require_login(state: &AppState) -> Result<UserProfile, ApiError> {
    let session = state.session.lock().await;
    session.current().cloned().ok_or(ApiError::Unauthorized)
}
