use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub time: String,
    pub price: f64,
}

const CHART_DAYS: usize = 30;
const START_PRICE: f64 = 2500.0;

/// Demo price history: a 30-day random walk from 2500, each step uniform
/// in (-50, +50), rounded to paise.
pub fn generate_chart_data() -> Vec<ChartPoint> {
    generate_chart_data_with(&mut rand::thread_rng())
}

pub fn generate_chart_data_with<R: Rng>(rng: &mut R) -> Vec<ChartPoint> {
    let mut price = START_PRICE;
    (1..=CHART_DAYS)
        .map(|day| {
            price += rng.gen_range(-50.0..50.0);
            ChartPoint {
                time: format!("Day {day}"),
                price: (price * 100.0).round() / 100.0,
            }
        })
        .collect()
}
