use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{
    DistributionEntry, Holding, HoldingMetrics, HoldingRow, PortfolioSnapshot, PriceBook,
    PriceEntry,
};

// Amounts and prices are not validated, so every sum and product saturates at
// the Decimal range instead of panicking.

/// Unit price for a symbol, zero when the price book does not know it.
pub fn current_price(symbol: &str, prices: &PriceBook) -> Decimal {
    prices
        .get(symbol)
        .map(|entry| *entry.price())
        .unwrap_or(Decimal::ZERO)
}

/// `part / whole × 100`, clamped to the Decimal range. `whole` must be non-zero.
pub fn saturating_percent(part: Decimal, whole: Decimal) -> Decimal {
    match part.checked_div(whole) {
        Some(ratio) => ratio.saturating_mul(dec!(100)),
        None if part.is_sign_negative() != whole.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

pub fn compute_snapshot(holdings: &[Holding], prices: &PriceBook) -> PortfolioSnapshot {
    let mut total_value = Decimal::ZERO;
    let mut total_invested = Decimal::ZERO;

    for holding in holdings {
        let price = current_price(holding.symbol(), prices);
        total_value = total_value.saturating_add(holding.value_at(price));
        total_invested = total_invested.saturating_add(holding.invested_value());
    }

    let total_pnl = total_value.saturating_sub(total_invested);
    let total_pnl_percent = if total_invested > Decimal::ZERO {
        saturating_percent(total_pnl, total_invested)
    } else {
        Decimal::ZERO
    };

    PortfolioSnapshot::new(total_value, total_invested, total_pnl, total_pnl_percent)
}

pub fn compute_distribution(
    holdings: &[Holding],
    prices: &PriceBook,
    total_value: Decimal,
) -> Vec<DistributionEntry> {
    holdings
        .iter()
        .map(|holding| {
            let value = holding.value_at(current_price(holding.symbol(), prices));
            let percentage = if total_value > Decimal::ZERO {
                saturating_percent(value, total_value)
            } else {
                Decimal::ZERO
            };
            DistributionEntry::new(holding.symbol().to_string(), value, percentage)
        })
        .collect()
}

/// Row level metrics. Returns `None` for a holding without a price entry.
///
/// Unlike the snapshot, the percentage is not guarded: a holding bought for
/// nothing has no P&L percentage at all. That is the only case where
/// `pnl_percent` is `None`; an out of range ratio saturates.
pub fn compute_holding_metrics(
    holding: &Holding,
    price_entry: Option<&PriceEntry>,
) -> Option<HoldingMetrics> {
    let price_entry = price_entry?;

    let current_value = holding.value_at(*price_entry.price());
    let invested_value = holding.invested_value();
    let pnl = current_value.saturating_sub(invested_value);
    let pnl_percent = if invested_value.is_zero() {
        None
    } else {
        Some(saturating_percent(pnl, invested_value))
    };

    Some(HoldingMetrics::new(
        current_value,
        invested_value,
        pnl,
        pnl_percent,
    ))
}

pub fn holding_rows(holdings: &[Holding], prices: &PriceBook) -> Vec<HoldingRow> {
    holdings
        .iter()
        .filter_map(|holding| {
            let price = prices.get(holding.symbol())?;
            let metrics = compute_holding_metrics(holding, Some(price))?;
            Some(HoldingRow::new(holding.clone(), price.clone(), metrics))
        })
        .collect()
}
