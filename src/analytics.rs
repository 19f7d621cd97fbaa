//! Read-side projections over the current state. Nothing here mutates;
//! every list is recomputed from scratch on each call.

use serde::{Deserialize, Serialize};

use crate::models::{Holding, Stock, WatchlistItem};

/// Stocks by percentage change, best first.
pub fn top_gainers(stocks: &[Stock], n: usize) -> Vec<Stock> {
    let mut sorted = stocks.to_vec();
    sorted.sort_by(|a, b| b.change_percent.total_cmp(&a.change_percent));
    sorted.truncate(n);
    sorted
}

/// Stocks by percentage change, worst first.
pub fn top_losers(stocks: &[Stock], n: usize) -> Vec<Stock> {
    let mut sorted = stocks.to_vec();
    sorted.sort_by(|a, b| a.change_percent.total_cmp(&b.change_percent));
    sorted.truncate(n);
    sorted
}

/// Stocks by traded volume, busiest first.
pub fn most_active(stocks: &[Stock], n: usize) -> Vec<Stock> {
    let mut sorted = stocks.to_vec();
    sorted.sort_by(|a, b| b.volume.cmp(&a.volume));
    sorted.truncate(n);
    sorted
}

/// Holdings by unrealized P/L percent, best first. The dashboard shows
/// the top 3.
pub fn holdings_top_gainers(holdings: &[Holding], n: usize) -> Vec<Holding> {
    let mut sorted = holdings.to_vec();
    sorted.sort_by(|a, b| b.profit_loss_percent.total_cmp(&a.profit_loss_percent));
    sorted.truncate(n);
    sorted
}

/// Watchlist rows by absolute percentage change, biggest move first.
pub fn top_movers(items: &[WatchlistItem], n: usize) -> Vec<WatchlistItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.change_percent.abs().total_cmp(&a.change_percent.abs()));
    sorted.truncate(n);
    sorted
}

fn default_max_price() -> f64 {
    15_000.0
}

fn default_max_pe() -> f64 {
    100.0
}

/// Screener criteria with the demo's defaults, which match every seeded
/// stock.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScreenerFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub min_price: f64,
    #[serde(default = "default_max_price")]
    pub max_price: f64,
    #[serde(default)]
    pub min_pe: f64,
    #[serde(default = "default_max_pe")]
    pub max_pe: f64,
    #[serde(default)]
    pub min_volume: u64,
}

impl Default for ScreenerFilter {
    fn default() -> Self {
        ScreenerFilter {
            search: String::new(),
            min_price: 0.0,
            max_price: default_max_price(),
            min_pe: 0.0,
            max_pe: default_max_pe(),
            min_volume: 0,
        }
    }
}

impl ScreenerFilter {
    /// Case-insensitive substring match on symbol or name, plus the
    /// numeric bands.
    pub fn matches(&self, stock: &Stock) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || stock.symbol.to_lowercase().contains(&term)
            || stock.name.to_lowercase().contains(&term);

        matches_search
            && stock.price >= self.min_price
            && stock.price <= self.max_price
            && stock.pe >= self.min_pe
            && stock.pe <= self.max_pe
            && stock.volume >= self.min_volume
    }

    pub fn apply(&self, stocks: &[Stock]) -> Vec<Stock> {
        stocks.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Holding;

    fn stock(symbol: &str, price: f64, change_percent: f64, volume: u64, pe: f64) -> Stock {
        Stock {
            symbol: symbol.to_string(),
            name: format!("{symbol} Ltd"),
            price,
            change: 0.0,
            change_percent,
            volume,
            market_cap: String::new(),
            pe,
            high: price,
            low: price,
        }
    }

    fn watch(symbol: &str, change_percent: f64) -> WatchlistItem {
        WatchlistItem {
            id: symbol.to_string(),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            price: 100.0,
            change: 0.0,
            change_percent,
        }
    }

    fn sample() -> Vec<Stock> {
        vec![
            stock("RELIANCE", 2750.0, 1.66, 50_000_000, 23.5),
            stock("TCS", 3200.0, 1.11, 30_000_000, 28.2),
            stock("INFY", 1650.0, -1.49, 40_000_000, 25.8),
            stock("WIPRO", 380.0, 1.32, 60_000_000, 18.5),
            stock("HDFC", 1550.0, -0.96, 35_000_000, 22.3),
            stock("BAJAJ-AUTO", 6850.0, 1.85, 5_000_000, 15.2),
        ]
    }

    #[test]
    fn gainers_and_losers_are_ordered() {
        let stocks = sample();
        let gainers = top_gainers(&stocks, 5);
        assert_eq!(gainers[0].symbol, "BAJAJ-AUTO");
        assert_eq!(gainers[1].symbol, "RELIANCE");

        let losers = top_losers(&stocks, 5);
        assert_eq!(losers[0].symbol, "INFY");
        assert_eq!(losers[1].symbol, "HDFC");
    }

    #[test]
    fn most_active_sorts_by_volume() {
        let active = most_active(&sample(), 3);
        let symbols: Vec<_> = active.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, ["WIPRO", "RELIANCE", "INFY"]);
    }

    #[test]
    fn holdings_top_gainers_takes_prefix() {
        let holdings = vec![
            Holding::open("1", "RELIANCE", 100, 2500.0, 2750.0),
            Holding::open("2", "TCS", 50, 3000.0, 3200.0),
            Holding::open("3", "INFY", 200, 1800.0, 1650.0),
        ];
        let top = holdings_top_gainers(&holdings, 3);
        let symbols: Vec<_> = top.iter().map(|h| h.symbol.as_str()).collect();
        assert_eq!(symbols, ["RELIANCE", "TCS", "INFY"]);
        assert_eq!(holdings_top_gainers(&holdings, 1).len(), 1);
    }

    #[test]
    fn movers_rank_by_absolute_change() {
        let watchlist = vec![
            watch("RELIANCE", 1.66),
            watch("TCS", 1.11),
            watch("INFY", -1.49),
            watch("HDFC", -0.96),
            watch("WIPRO", 1.32),
        ];
        let movers = top_movers(&watchlist, 4);
        let symbols: Vec<_> = movers.iter().map(|m| m.symbol.as_str()).collect();
        assert_eq!(symbols, ["RELIANCE", "INFY", "WIPRO", "TCS"]);
    }

    #[test]
    fn default_filter_matches_everything() {
        let stocks = sample();
        assert_eq!(ScreenerFilter::default().apply(&stocks).len(), stocks.len());
    }

    #[test]
    fn filter_bands_and_search_compose() {
        let stocks = sample();

        let cheap = ScreenerFilter {
            max_price: 2000.0,
            ..Default::default()
        };
        let symbols: Vec<_> = cheap.apply(&stocks).iter().map(|s| s.symbol.clone()).collect();
        assert_eq!(symbols, ["INFY", "WIPRO", "HDFC"]);

        let by_name = ScreenerFilter {
            search: "reli".to_string(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&stocks).len(), 1);

        let busy_value = ScreenerFilter {
            min_volume: 40_000_000,
            max_pe: 26.0,
            ..Default::default()
        };
        let symbols: Vec<_> = busy_value
            .apply(&stocks)
            .iter()
            .map(|s| s.symbol.clone())
            .collect();
        assert_eq!(symbols, ["RELIANCE", "INFY", "WIPRO"]);
    }
}
