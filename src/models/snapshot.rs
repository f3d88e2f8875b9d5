use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct PortfolioSnapshot {
    total_value: Decimal,
    total_invested: Decimal,
    total_pnl: Decimal,
    total_pnl_percent: Decimal,
}
