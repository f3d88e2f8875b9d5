use std::str::FromStr;

use anyhow::{Context, Result};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};
use rust_decimal::Decimal;

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    let trimmed = field.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

pub fn gain_color(value: Decimal) -> Color {
    if value >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    }
}

pub fn format_money(value: Decimal) -> String {
    if value < Decimal::ZERO {
        format!("-${:.2}", value.abs())
    } else {
        format!("${:.2}", value)
    }
}

pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", value)
}

pub fn format_change(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Prints a row percentage. `None` only ever means nothing was invested
/// (out of range ratios arrive saturated), so it is shown the way a float
/// division by zero prints, signed by the P&L it came from.
pub fn format_pnl_percent(pnl_percent: Option<Decimal>, pnl: Decimal) -> String {
    match pnl_percent {
        Some(percent) => format_percent(percent),
        None if pnl > Decimal::ZERO => String::from("Infinity%"),
        None if pnl < Decimal::ZERO => String::from("-Infinity%"),
        None => String::from("NaN%"),
    }
}

pub fn pnl_percent_color(pnl_percent: Option<Decimal>, pnl: Decimal) -> Color {
    match pnl_percent {
        Some(percent) => gain_color(percent),
        None if pnl > Decimal::ZERO => Color::Green,
        None => Color::Red,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
