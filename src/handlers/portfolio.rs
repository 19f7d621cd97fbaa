use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::analytics;
use crate::error::ApiError;
use crate::handlers::auth::require_login;
use crate::models::{Holding, Portfolio};
use crate::state::AppState;

/// Portfolio snapshot with the live holdings list filled in.
pub async fn get_portfolio(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Portfolio>), ApiError> {
    require_login(&state).await?;
    let market = state.market.lock().await;
    let mut portfolio = market.portfolio.clone();
    portfolio.holdings = market.holdings.clone();
    Ok((StatusCode::OK, Json(portfolio)))
}

#[derive(Serialize, Debug)]
pub struct DashboardSummary {
    pub holdings_count: usize,
    pub orders_count: usize,
    pub top_gainers: Vec<Holding>,
}

/// The dashboard's quick stats: counts plus the three best holdings by
/// P/L percent.
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<DashboardSummary>), ApiError> {
    require_login(&state).await?;
    let market = state.market.lock().await;
    let summary = DashboardSummary {
        holdings_count: market.holdings.len(),
        orders_count: market.orders.len(),
        top_gainers: analytics::holdings_top_gainers(&market.holdings, 3),
    };
    Ok((StatusCode::OK, Json(summary)))
}
