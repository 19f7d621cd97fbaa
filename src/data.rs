use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::{Stock, WatchlistItem};

/// Market-data capability. The mock below never fails, but the contract
/// is fallible so a real backend can be swapped in without touching call
/// sites.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("market data unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn get_stocks(&self) -> Result<Vec<Stock>, DataError>;
    async fn get_stock(&self, symbol: &str) -> Result<Option<Stock>, DataError>;
    async fn get_watchlist(&self) -> Result<Vec<WatchlistItem>, DataError>;
    async fn add_to_watchlist(&self, stock: &Stock) -> Result<WatchlistItem, DataError>;
    async fn remove_from_watchlist(&self, symbol: &str) -> Result<bool, DataError>;
}

// Artificial latencies matching the demo's fake network.
const STOCKS_DELAY: Duration = Duration::from_millis(500);
const STOCK_DELAY: Duration = Duration::from_millis(300);
const WATCHLIST_DELAY: Duration = Duration::from_millis(400);
const WATCHLIST_EDIT_DELAY: Duration = Duration::from_millis(200);

fn stock(
    symbol: &str,
    name: &str,
    price: f64,
    change: f64,
    change_percent: f64,
    volume: u64,
    market_cap: &str,
    pe: f64,
    high: f64,
    low: f64,
) -> Stock {
    Stock {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        change_percent,
        volume,
        market_cap: market_cap.to_string(),
        pe,
        high,
        low,
    }
}

lazy_static::lazy_static! {
    static ref MOCK_STOCKS: Vec<Stock> = vec![
        stock("RELIANCE", "Reliance Industries", 2750.0, 45.0, 1.66, 50_000_000, "₹17.5L Cr", 23.5, 2800.0, 2700.0),
        stock("TCS", "Tata Consultancy Services", 3200.0, 35.0, 1.11, 30_000_000, "₹12.8L Cr", 28.2, 3250.0, 3100.0),
        stock("INFY", "Infosys", 1650.0, -25.0, -1.49, 40_000_000, "₹6.6L Cr", 25.8, 1700.0, 1620.0),
        stock("WIPRO", "Wipro", 380.0, 5.0, 1.32, 60_000_000, "₹1.52L Cr", 18.5, 390.0, 370.0),
        stock("HDFC", "HDFC Bank", 1550.0, -15.0, -0.96, 35_000_000, "₹8.7L Cr", 22.3, 1580.0, 1520.0),
        stock("ICICI", "ICICI Bank", 1180.0, 12.0, 1.02, 45_000_000, "₹6.5L Cr", 18.9, 1200.0, 1150.0),
        stock("LT", "Larsen & Toubro", 2800.0, 40.0, 1.45, 25_000_000, "₹3.36L Cr", 32.5, 2850.0, 2750.0),
        stock("BAJAJ-AUTO", "Bajaj Auto", 6850.0, 125.0, 1.85, 5_000_000, "₹1.74L Cr", 15.2, 6950.0, 6700.0),
    ];
}

fn seed_watchlist() -> Vec<WatchlistItem> {
    ["RELIANCE", "TCS", "INFY", "HDFC", "WIPRO"]
        .iter()
        .enumerate()
        .filter_map(|(i, symbol)| {
            let s = MOCK_STOCKS.iter().find(|s| &s.symbol == symbol)?;
            Some(WatchlistItem {
                id: (i + 1).to_string(),
                symbol: s.symbol.clone(),
                name: s.name.clone(),
                price: s.price,
                change: s.change,
                change_percent: s.change_percent,
            })
        })
        .collect()
}

/// In-memory stand-in for a market-data backend: static quote tables plus
/// a mutable watchlist, every call delayed by a fixed fake latency.
/// Returned vectors are snapshots; callers may sort and filter freely.
pub struct MockMarketData {
    watchlist: Mutex<Vec<WatchlistItem>>,
}

impl MockMarketData {
    pub fn new() -> Self {
        MockMarketData {
            watchlist: Mutex::new(seed_watchlist()),
        }
    }
}

impl Default for MockMarketData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for MockMarketData {
    async fn get_stocks(&self) -> Result<Vec<Stock>, DataError> {
        tokio::time::sleep(STOCKS_DELAY).await;
        Ok(MOCK_STOCKS.clone())
    }

    async fn get_stock(&self, symbol: &str) -> Result<Option<Stock>, DataError> {
        tokio::time::sleep(STOCK_DELAY).await;
        Ok(MOCK_STOCKS.iter().find(|s| s.symbol == symbol).cloned())
    }

    async fn get_watchlist(&self) -> Result<Vec<WatchlistItem>, DataError> {
        tokio::time::sleep(WATCHLIST_DELAY).await;
        Ok(self.watchlist.lock().await.clone())
    }

    /// Idempotent per symbol: adding an already-watched stock returns the
    /// existing row instead of duplicating it.
    async fn add_to_watchlist(&self, stock: &Stock) -> Result<WatchlistItem, DataError> {
        tokio::time::sleep(WATCHLIST_EDIT_DELAY).await;
        let mut watchlist = self.watchlist.lock().await;
        if let Some(existing) = watchlist.iter().find(|w| w.symbol == stock.symbol) {
            return Ok(existing.clone());
        }
        let item = WatchlistItem {
            id: uuid::Uuid::new_v4().to_string(),
            symbol: stock.symbol.clone(),
            name: stock.name.clone(),
            price: stock.price,
            change: stock.change,
            change_percent: stock.change_percent,
        };
        watchlist.push(item.clone());
        Ok(item)
    }

    async fn remove_from_watchlist(&self, symbol: &str) -> Result<bool, DataError> {
        tokio::time::sleep(WATCHLIST_EDIT_DELAY).await;
        let mut watchlist = self.watchlist.lock().await;
        let before = watchlist.len();
        watchlist.retain(|w| w.symbol != symbol);
        Ok(watchlist.len() < before)
    }
}
