#[cfg(test)]
mod tests {
    use ratatui::style::Color;
    use rust_decimal_macros::dec;

    use crate::app::utils::{
        format_change, format_money, format_pnl_percent, parse_decimal, pnl_percent_color,
    };

    #[test]
    fn parse_decimal_works() {
        assert_eq!(parse_decimal("12.5", "amount").unwrap(), dec!(12.5));
        assert_eq!(parse_decimal(" 3 ", "amount").unwrap(), dec!(3));
        assert_eq!(parse_decimal("2.5e2", "amount").unwrap(), dec!(250));

        let err = parse_decimal("abc", "amount").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse amount 'abc'");
    }

    #[test]
    fn money_and_change_formatting() {
        assert_eq!(format_money(dec!(43250)), "$43250.00");
        assert_eq!(format_money(dec!(-840)), "-$840.00");
        assert_eq!(format_change(dec!(2.5)), "+2.50%");
        assert_eq!(format_change(dec!(-1.2)), "-1.20%");
    }

    #[test]
    fn undefined_percent_prints_like_a_float() {
        assert_eq!(format_pnl_percent(Some(dec!(8.126)), dec!(1)), "8.13%");
        assert_eq!(format_pnl_percent(None, dec!(10)), "Infinity%");
        assert_eq!(format_pnl_percent(None, dec!(-10)), "-Infinity%");
        assert_eq!(format_pnl_percent(None, dec!(0)), "NaN%");

        assert_eq!(pnl_percent_color(None, dec!(10)), Color::Green);
        assert_eq!(pnl_percent_color(None, dec!(0)), Color::Red);
    }
}
