use crate::models::{Holding, Order, Portfolio};

/// Single source of truth for the portfolio, holdings and orders during a
/// session. Owned exclusively by the process-wide app state; nothing else
/// mutates these lists.
#[derive(Debug, Clone)]
pub struct MarketState {
    pub portfolio: Portfolio,
    pub holdings: Vec<Holding>,
    pub orders: Vec<Order>,
}

impl MarketState {
    pub fn new(portfolio: Portfolio, holdings: Vec<Holding>) -> Self {
        MarketState {
            portfolio,
            holdings,
            orders: Vec::new(),
        }
    }

    /// The demo account every session starts from.
    pub fn seeded() -> Self {
        let portfolio = Portfolio {
            value: 500_000.0,
            invested: 350_000.0,
            total_value: 500_000.0,
            total_invested: 350_000.0,
            total_profit_loss: 45_000.0,
            total_profit_loss_percent: 12.86,
            cash: 150_000.0,
            holdings: Vec::new(),
        };
        let holdings = vec![
            Holding::open("1", "RELIANCE", 100, 2500.0, 2750.0),
            Holding::open("2", "TCS", 50, 3000.0, 3200.0),
            Holding::open("3", "INFY", 200, 1800.0, 1650.0),
        ];
        MarketState::new(portfolio, holdings)
    }

    /// Prepend an order so the list stays newest-first. Append-only; no
    /// dedup by id.
    pub fn add_order(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Replace the holding whose id matches. Returns `false` (and leaves
    /// the list untouched) when no holding has that id.
    pub fn update_holding(&mut self, holding: Holding) -> bool {
        match self.holdings.iter_mut().find(|h| h.id == holding.id) {
            Some(slot) => {
                *slot = holding;
                true
            }
            None => {
                tracing::warn!("update_holding: no holding with id {}", holding.id);
                false
            }
        }
    }

    /// Move cash in or out. Adjusts `cash` and `total_value` only; the
    /// invested figure and the holdings are left alone.
    pub fn update_cash(&mut self, amount: f64) {
        self.portfolio.cash += amount;
        self.portfolio.total_value += amount;
    }

    pub fn holding_for(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderSide, OrderStatus, OrderType};
    use chrono::Utc;

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            symbol: "RELIANCE".to_string(),
            side: OrderSide::Buy,
            order_type: OrderType::Market,
            quantity: 1,
            price: 2750.0,
            status: OrderStatus::Completed,
            timestamp: Utc::now(),
            total_value: 2750.0,
            limit_price: None,
            stop_price: None,
        }
    }

    #[test]
    fn orders_are_newest_first() {
        let mut state = MarketState::seeded();
        for i in 0..5 {
            state.add_order(order(&i.to_string()));
        }
        assert_eq!(state.orders.len(), 5);
        assert_eq!(state.orders[0].id, "4");
        assert_eq!(state.orders[4].id, "0");
    }

    #[test]
    fn add_order_does_not_dedup() {
        let mut state = MarketState::seeded();
        state.add_order(order("same"));
        state.add_order(order("same"));
        assert_eq!(state.orders.len(), 2);
    }

    #[test]
    fn update_cash_is_invertible() {
        let mut state = MarketState::seeded();
        let (cash, total) = (state.portfolio.cash, state.portfolio.total_value);
        state.update_cash(12_345.67);
        state.update_cash(-12_345.67);
        assert!((state.portfolio.cash - cash).abs() < 1e-9);
        assert!((state.portfolio.total_value - total).abs() < 1e-9);
    }

    #[test]
    fn update_cash_leaves_invested_alone() {
        let mut state = MarketState::seeded();
        let invested = state.portfolio.invested;
        state.update_cash(-50_000.0);
        assert_eq!(state.portfolio.invested, invested);
        assert!((state.portfolio.cash - 100_000.0).abs() < 1e-9);
        assert!((state.portfolio.total_value - 450_000.0).abs() < 1e-9);
    }

    #[test]
    fn update_holding_replaces_by_id() {
        let mut state = MarketState::seeded();
        let updated = Holding::open("1", "RELIANCE", 150, 2550.0, 2750.0);
        assert!(state.update_holding(updated.clone()));
        assert_eq!(state.holding_for("RELIANCE"), Some(&updated));
        assert_eq!(state.holdings.len(), 3);
    }

    #[test]
    fn update_holding_is_noop_on_unknown_id() {
        let mut state = MarketState::seeded();
        let before = state.holdings.clone();
        let stranger = Holding::open("99", "HDFC", 10, 1500.0, 1550.0);
        assert!(!state.update_holding(stranger));
        assert_eq!(state.holdings, before);
    }
}
