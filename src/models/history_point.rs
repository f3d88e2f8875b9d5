use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct HistoryPoint {
    date: NaiveDate,
    price: f64,
    portfolio_value: f64,
}
