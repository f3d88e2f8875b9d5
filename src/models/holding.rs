use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Holding {
    id: u64,
    symbol: String,
    amount: Decimal,
    purchase_price: Decimal,
    date_added: NaiveDate,
}

impl Holding {
    pub fn invested_value(&self) -> Decimal {
        self.value_at(self.purchase_price)
    }

    /// Value of the lot at a unit price, clamped to the Decimal range.
    pub fn value_at(&self, price: Decimal) -> Decimal {
        self.amount.saturating_mul(price)
    }
}
