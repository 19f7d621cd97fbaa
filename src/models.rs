use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A market snapshot for one listed stock. Replaced wholesale on refresh,
/// never partially mutated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: String,
    pub pe: f64,
    pub high: f64,
    pub low: f64,
}

/// A position of some quantity of one stock at an average cost basis.
///
/// `value`, `profit_loss` and `profit_loss_percent` are derived from the
/// base fields; build holdings through [`Holding::open`] so they can never
/// drift out of sync.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Holding {
    pub id: String,
    pub symbol: String,
    pub quantity: u32,
    pub buy_price: f64,
    pub current_price: f64,
    pub value: f64,
    pub profit_loss: f64,
    pub profit_loss_percent: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Market,
    Limit,
    StopLoss,
}

/// The demo executes everything immediately, so orders are created as
/// `Completed` and never transition.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

/// A submitted trade. Created once and appended to the order list; never
/// mutated in place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub symbol: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: u32,
    pub price: f64,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
    pub total_value: f64,
    pub limit_price: Option<f64>,
    pub stop_price: Option<f64>,
}

/// Aggregate account snapshot. The mock seed data is not strictly
/// reconciled against the holdings, matching the demo it mirrors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub value: f64,
    pub invested: f64,
    pub total_value: f64,
    pub total_invested: f64,
    pub total_profit_loss: f64,
    pub total_profit_loss_percent: f64,
    pub cash: f64,
    pub holdings: Vec<Holding>,
}

/// A denormalized projection of [`Stock`] with a client-assigned id,
/// unique per symbol within one watchlist.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WatchlistItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// Session-scoped identity. Fabricated at login/signup, destroyed at
/// logout; there is no server-side identity behind it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub account_number: String,
    pub join_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PlaceOrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: u32,
    pub limit_price: Option<f64>,
    pub stop_price: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WatchlistRequest {
    pub symbol: String,
}
