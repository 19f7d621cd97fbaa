use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::error::ApiError;
use crate::handlers::auth::require_login;
use crate::models::{Order, OrderSide, OrderStatus, OrderType, PlaceOrderRequest};
use crate::state::AppState;

/// Place a trade. The demo fills everything immediately: the order is
/// recorded COMPLETED, cash moves by the order total, and any existing
/// holding of the symbol is re-averaged (BUY) or reduced (SELL). The one
/// real failure path is a BUY exceeding available cash.
#[axum::debug_handler]
pub async fn place_order(
    State(state): State<AppState>,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    require_login(&state).await?;

    if req.quantity < 1 {
        return Err(ApiError::InvalidQuantity);
    }

    let stock = state
        .data
        .get_stock(&req.symbol)
        .await?
        .ok_or(ApiError::UnknownSymbol(req.symbol.clone()))?;

    // Limit orders execute at the limit price, everything else at market.
    let price = match req.order_type {
        OrderType::Limit => req.limit_price.unwrap_or(stock.price),
        OrderType::Market | OrderType::StopLoss => stock.price,
    };
    let total_value = price * req.quantity as f64;

    let mut market = state.market.lock().await;

    if req.side == OrderSide::Buy && total_value > market.portfolio.cash {
        return Err(ApiError::InsufficientFunds);
    }

    let order = Order {
        id: uuid::Uuid::new_v4().to_string(),
        symbol: req.symbol.clone(),
        side: req.side,
        order_type: req.order_type,
        quantity: req.quantity,
        price,
        status: OrderStatus::Completed,
        timestamp: Utc::now(),
        total_value,
        limit_price: req.limit_price,
        stop_price: req.stop_price,
    };
    market.add_order(order.clone());

    match req.side {
        OrderSide::Buy => market.update_cash(-total_value),
        OrderSide::Sell => market.update_cash(total_value),
    }

    // The container only replaces existing holdings; a BUY of a brand-new
    // symbol moves cash and records the order without opening a position.
    if let Some(held) = market.holding_for(&req.symbol).cloned() {
        let updated = match req.side {
            OrderSide::Buy => {
                let quantity = held.quantity + req.quantity;
                let avg_cost =
                    (held.buy_price * held.quantity as f64 + total_value) / quantity as f64;
                held.resize(quantity, avg_cost).reprice(price)
            }
            OrderSide::Sell => {
                let quantity = held.quantity.saturating_sub(req.quantity);
                held.resize(quantity, held.buy_price).reprice(price)
            }
        };
        market.update_holding(updated);
    }

    tracing::info!(
        "{:?} {} x {} @ {:.2}",
        order.side,
        order.quantity,
        order.symbol,
        order.price
    );

    Ok((StatusCode::CREATED, Json(order)))
}

/// Order history, newest first.
pub async fn get_orders(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Order>>), ApiError> {
    require_login(&state).await?;
    let market = state.market.lock().await;
    Ok((StatusCode::OK, Json(market.orders.clone())))
}
