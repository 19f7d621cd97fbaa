use axum::extract::{Path, State};
use axum::{http::StatusCode, Json};
use serde::Deserialize;

use crate::alerts::{AlertDirection, PriceAlert};
use crate::error::ApiError;
use crate::handlers::auth::require_login;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct AlertRequest {
    pub symbol: String,
    pub target_price: f64,
    pub direction: AlertDirection,
}

pub async fn get_alerts(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<PriceAlert>>), ApiError> {
    require_login(&state).await?;
    let alerts = state.alerts.lock().await;
    Ok((StatusCode::OK, Json(alerts.all().to_vec())))
}

pub async fn add_alert(
    State(state): State<AppState>,
    Json(req): Json<AlertRequest>,
) -> Result<(StatusCode, Json<PriceAlert>), ApiError> {
    require_login(&state).await?;
    let mut alerts = state.alerts.lock().await;
    let alert = alerts.add(&req.symbol, req.target_price, req.direction)?;
    Ok((StatusCode::CREATED, Json(alert)))
}

pub async fn remove_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    require_login(&state).await?;
    let mut alerts = state.alerts.lock().await;
    if alerts.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::UnknownAlert(id))
    }
}

/// Flip an alert on or off; responds with the new active state.
pub async fn toggle_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<bool>), ApiError> {
    require_login(&state).await?;
    let mut alerts = state.alerts.lock().await;
    match alerts.toggle(&id) {
        Some(active) => Ok((StatusCode::OK, Json(active))),
        None => Err(ApiError::UnknownAlert(id)),
    }
}

/// Active alerts currently satisfied by the latest quotes.
pub async fn get_triggered_alerts(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<PriceAlert>>), ApiError> {
    require_login(&state).await?;
    let stocks = state.data.get_stocks().await?;
    let alerts = state.alerts.lock().await;
    Ok((StatusCode::OK, Json(alerts.triggered(&stocks))))
}
