use axum::extract::{Path, Query, State};
use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::analytics::{self, ScreenerFilter};
use crate::chart::{generate_chart_data, ChartPoint};
use crate::error::ApiError;
use crate::handlers::auth::require_login;
use crate::models::{Stock, WatchlistItem, WatchlistRequest};
use crate::state::AppState;

/// The full mock market table.
pub async fn get_stocks(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Stock>>), ApiError> {
    require_login(&state).await?;
    let stocks = state.data.get_stocks().await?;
    Ok((StatusCode::OK, Json(stocks)))
}

pub async fn get_stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<(StatusCode, Json<Stock>), ApiError> {
    require_login(&state).await?;
    let stock = state
        .data
        .get_stock(&symbol)
        .await?
        .ok_or(ApiError::UnknownSymbol(symbol))?;
    Ok((StatusCode::OK, Json(stock)))
}

pub async fn get_watchlist(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<WatchlistItem>>), ApiError> {
    require_login(&state).await?;
    let watchlist = state.data.get_watchlist().await?;
    Ok((StatusCode::OK, Json(watchlist)))
}

/// Start watching a symbol. Adding a symbol twice returns the existing
/// row.
pub async fn add_to_watchlist(
    State(state): State<AppState>,
    Json(req): Json<WatchlistRequest>,
) -> Result<(StatusCode, Json<WatchlistItem>), ApiError> {
    require_login(&state).await?;
    let stock = state
        .data
        .get_stock(&req.symbol)
        .await?
        .ok_or(ApiError::UnknownSymbol(req.symbol))?;
    let item = state.data.add_to_watchlist(&stock).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn remove_from_watchlist(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<(StatusCode, Json<bool>), ApiError> {
    require_login(&state).await?;
    let removed = state.data.remove_from_watchlist(&symbol).await?;
    Ok((StatusCode::OK, Json(removed)))
}

/// Watchlist rows ranked by absolute percentage change, top 4.
pub async fn get_watchlist_movers(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<WatchlistItem>>), ApiError> {
    require_login(&state).await?;
    let watchlist = state.data.get_watchlist().await?;
    Ok((StatusCode::OK, Json(analytics::top_movers(&watchlist, 4))))
}

#[derive(Serialize, Debug)]
pub struct MarketInsights {
    pub gainers: Vec<Stock>,
    pub losers: Vec<Stock>,
    pub most_active: Vec<Stock>,
}

/// Market movers, recomputed from the current quote table on every call.
pub async fn get_insights(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MarketInsights>), ApiError> {
    require_login(&state).await?;
    let stocks = state.data.get_stocks().await?;
    let insights = MarketInsights {
        gainers: analytics::top_gainers(&stocks, 5),
        losers: analytics::top_losers(&stocks, 5),
        most_active: analytics::most_active(&stocks, 5),
    };
    Ok((StatusCode::OK, Json(insights)))
}

/// Stocks matching the screener criteria in the query string.
pub async fn screen_stocks(
    State(state): State<AppState>,
    Query(filter): Query<ScreenerFilter>,
) -> Result<(StatusCode, Json<Vec<Stock>>), ApiError> {
    require_login(&state).await?;
    let stocks = state.data.get_stocks().await?;
    Ok((StatusCode::OK, Json(filter.apply(&stocks))))
}

/// Demo chart series for a known symbol.
pub async fn get_chart(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<(StatusCode, Json<Vec<ChartPoint>>), ApiError> {
    require_login(&state).await?;
    state
        .data
        .get_stock(&symbol)
        .await?
        .ok_or(ApiError::UnknownSymbol(symbol))?;
    Ok((StatusCode::OK, Json(generate_chart_data())))
}
