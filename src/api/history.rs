use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::models::HistoryPoint;

/// Longest history the chart is asked for, ten years of daily points.
pub const MAX_HISTORY_DAYS: u32 = 3650;

/// Produces chart history ending at `today`, one point per day.
pub trait HistorySource {
    fn generate(&mut self, base_price: f64, days: u32, today: NaiveDate) -> Vec<HistoryPoint>;
}

/// Random walk of at most ±5% a day. The portfolio line is half the walk
/// plus noise; it is decoration, not a valuation.
pub struct RandomWalkHistory<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomWalkHistory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomWalkHistory<StdRng> {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(StdRng::seed_from_u64(seed)),
            None => Self::new(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> HistorySource for RandomWalkHistory<R> {
    fn generate(&mut self, base_price: f64, days: u32, today: NaiveDate) -> Vec<HistoryPoint> {
        let days = days.min(MAX_HISTORY_DAYS);
        let mut history = Vec::with_capacity(days as usize + 1);
        let mut price = base_price;

        for i in (0..=days).rev() {
            let Some(date) = today.checked_sub_days(Days::new(u64::from(i))) else {
                continue;
            };
            let variation = self.rng.gen_range(-0.05..0.05);
            price *= 1.0 + variation;
            let portfolio_value = price * 0.5 + self.rng.gen_range(0.0..10_000.0);

            history.push(HistoryPoint::new(date, price, portfolio_value));
        }

        history
    }
}
