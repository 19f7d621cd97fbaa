use crate::models::Holding;

/// Unrealized P/L in currency for a position.
pub fn profit_loss(buy_price: f64, current_price: f64, quantity: u32) -> f64 {
    (current_price - buy_price) * quantity as f64
}

/// Unrealized P/L as a percentage of cost basis.
///
/// Returns `None` when the cost basis is zero, where the ratio is
/// undefined. Callers that need a plain number render it as 0.
pub fn profit_loss_percent(buy_price: f64, current_price: f64) -> Option<f64> {
    if buy_price == 0.0 {
        return None;
    }
    Some((current_price - buy_price) / buy_price * 100.0)
}

impl Holding {
    /// Build a holding with all derived fields computed from the base
    /// fields. The only way derived fields get set.
    pub fn open(
        id: impl Into<String>,
        symbol: impl Into<String>,
        quantity: u32,
        buy_price: f64,
        current_price: f64,
    ) -> Self {
        Holding {
            id: id.into(),
            symbol: symbol.into(),
            quantity,
            buy_price,
            current_price,
            value: quantity as f64 * current_price,
            profit_loss: profit_loss(buy_price, current_price, quantity),
            profit_loss_percent: profit_loss_percent(buy_price, current_price).unwrap_or(0.0),
        }
    }

    /// Same position at a new market price, derived fields recomputed.
    pub fn reprice(&self, current_price: f64) -> Self {
        Holding::open(
            self.id.clone(),
            self.symbol.clone(),
            self.quantity,
            self.buy_price,
            current_price,
        )
    }

    /// Same instrument with a new quantity and cost basis, derived fields
    /// recomputed.
    pub fn resize(&self, quantity: u32, buy_price: f64) -> Self {
        Holding::open(
            self.id.clone(),
            self.symbol.clone(),
            quantity,
            buy_price,
            self.current_price,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn reliance_scenario() {
        // 100 shares bought at 2500, now trading at 2750.
        let h = Holding::open("1", "RELIANCE", 100, 2500.0, 2750.0);
        assert!((h.profit_loss - 25_000.0).abs() < EPS);
        assert!((h.profit_loss_percent - 10.0).abs() < EPS);
        assert!((h.value - 275_000.0).abs() < EPS);
    }

    #[test]
    fn derived_fields_consistent() {
        let h = Holding::open("2", "TCS", 50, 3000.0, 3200.0);
        assert!((h.value - h.quantity as f64 * h.current_price).abs() < EPS);
        assert!(
            (h.profit_loss - (h.current_price - h.buy_price) * h.quantity as f64).abs() < EPS
        );
        assert!(
            (h.profit_loss_percent
                - (h.current_price - h.buy_price) / h.buy_price * 100.0)
                .abs()
                < EPS
        );
    }

    #[test]
    fn loss_is_negative() {
        let h = Holding::open("3", "INFY", 200, 1800.0, 1650.0);
        assert!((h.profit_loss + 30_000.0).abs() < EPS);
        assert!((h.profit_loss_percent - (-150.0 / 1800.0 * 100.0)).abs() < EPS);
    }

    #[test]
    fn zero_cost_basis_has_no_percent() {
        assert_eq!(profit_loss_percent(0.0, 100.0), None);
        // The holding renders the undefined ratio as 0 rather than Inf/NaN.
        let h = Holding::open("4", "FREEBIE", 10, 0.0, 100.0);
        assert_eq!(h.profit_loss_percent, 0.0);
        assert!((h.profit_loss - 1000.0).abs() < EPS);
    }

    #[test]
    fn reprice_and_resize_recompute() {
        let h = Holding::open("5", "WIPRO", 10, 400.0, 380.0);
        let up = h.reprice(420.0);
        assert!((up.profit_loss - 200.0).abs() < EPS);
        let bigger = h.resize(20, 390.0);
        assert_eq!(bigger.quantity, 20);
        assert!((bigger.value - 20.0 * 380.0).abs() < EPS);
    }
}
