use serde::{Deserialize, Serialize};

use crate::models::Stock;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertDirection {
    Above,
    Below,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceAlert {
    pub id: String,
    pub symbol: String,
    pub target_price: f64,
    pub direction: AlertDirection,
    pub is_active: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("an alert needs a symbol and a positive target price")]
    Invalid,
}

/// User-managed price alerts. Purely session-scoped, like everything else
/// in the demo.
#[derive(Debug, Clone)]
pub struct AlertBook {
    alerts: Vec<PriceAlert>,
}

impl AlertBook {
    pub fn new() -> Self {
        AlertBook { alerts: Vec::new() }
    }

    /// The two alerts every demo session starts with.
    pub fn seeded() -> Self {
        AlertBook {
            alerts: vec![
                PriceAlert {
                    id: "1".to_string(),
                    symbol: "RELIANCE".to_string(),
                    target_price: 2800.0,
                    direction: AlertDirection::Above,
                    is_active: true,
                },
                PriceAlert {
                    id: "2".to_string(),
                    symbol: "TCS".to_string(),
                    target_price: 3100.0,
                    direction: AlertDirection::Below,
                    is_active: true,
                },
            ],
        }
    }

    pub fn all(&self) -> &[PriceAlert] {
        &self.alerts
    }

    pub fn add(
        &mut self,
        symbol: &str,
        target_price: f64,
        direction: AlertDirection,
    ) -> Result<PriceAlert, AlertError> {
        if symbol.trim().is_empty() || target_price <= 0.0 {
            return Err(AlertError::Invalid);
        }
        let alert = PriceAlert {
            id: uuid::Uuid::new_v4().to_string(),
            symbol: symbol.to_string(),
            target_price,
            direction,
            is_active: true,
        };
        self.alerts.push(alert.clone());
        Ok(alert)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() < before
    }

    /// Flip an alert's active flag; returns the new state, or `None` when
    /// no alert has that id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let alert = self.alerts.iter_mut().find(|a| a.id == id)?;
        alert.is_active = !alert.is_active;
        Some(alert.is_active)
    }

    /// Active alerts whose condition holds against the given price
    /// snapshot.
    pub fn triggered(&self, stocks: &[Stock]) -> Vec<PriceAlert> {
        self.alerts
            .iter()
            .filter(|alert| {
                if !alert.is_active {
                    return false;
                }
                stocks
                    .iter()
                    .find(|s| s.symbol == alert.symbol)
                    .map(|s| match alert.direction {
                        AlertDirection::Above => s.price >= alert.target_price,
                        AlertDirection::Below => s.price <= alert.target_price,
                    })
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}

impl Default for AlertBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, price: f64) -> Stock {
        Stock {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            price,
            change: 0.0,
            change_percent: 0.0,
            volume: 0,
            market_cap: String::new(),
            pe: 0.0,
            high: price,
            low: price,
        }
    }

    #[test]
    fn rejects_blank_or_nonpositive_alerts() {
        let mut book = AlertBook::new();
        assert!(book.add("", 100.0, AlertDirection::Above).is_err());
        assert!(book.add("TCS", 0.0, AlertDirection::Below).is_err());
        assert!(book.add("TCS", 3100.0, AlertDirection::Below).is_ok());
    }

    #[test]
    fn remove_and_toggle_by_id() {
        let mut book = AlertBook::seeded();
        assert_eq!(book.toggle("1"), Some(false));
        assert_eq!(book.toggle("1"), Some(true));
        assert_eq!(book.toggle("nope"), None);

        assert!(book.remove("2"));
        assert!(!book.remove("2"));
        assert_eq!(book.all().len(), 1);
    }

    #[test]
    fn triggers_respect_direction_and_active_flag() {
        let mut book = AlertBook::seeded();
        // RELIANCE above 2800, TCS below 3100.
        let quotes = vec![quote("RELIANCE", 2825.0), quote("TCS", 3200.0)];
        let hits = book.triggered(&quotes);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "RELIANCE");

        book.toggle("1");
        assert!(book.triggered(&quotes).is_empty());

        let falling = vec![quote("TCS", 3050.0)];
        let hits = book.triggered(&falling);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "TCS");
    }
}
