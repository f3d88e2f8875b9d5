#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rust_decimal_macros::dec;

    use crate::{
        app::{App, InputMode},
        models::DraftField,
        test::mock_portfolio,
    };

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add(app: &mut App, symbol: &str, amount: &str, price: &str) {
        type_text(app, symbol);
        press(app, KeyCode::Tab);
        type_text(app, amount);
        press(app, KeyCode::Tab);
        type_text(app, price);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn quit_from_browse_mode_only() {
        let mut app = App::new(mock_portfolio());
        press(&mut app, KeyCode::Char('a'));
        assert!(press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.portfolio().draft().symbol, "q");

        press(&mut app, KeyCode::Esc);
        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut app = App::new(mock_portfolio());
        press(&mut app, KeyCode::Tab);
        assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn form_adds_holdings_and_resets() {
        let mut app = App::new(mock_portfolio());
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode(), InputMode::Editing);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "40000");
        assert_eq!(app.focus(), DraftField::PurchasePrice);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.focus(), DraftField::Symbol);
        assert_eq!(app.portfolio().holdings().len(), 1);
        let snapshot = app.portfolio().snapshot();
        assert_eq!(*snapshot.total_pnl(), dec!(3250));
        assert_eq!(snapshot.total_pnl_percent().normalize(), dec!(8.125));
    }

    #[test]
    fn incomplete_form_is_ignored() {
        let mut app = App::new(mock_portfolio());
        press(&mut app, KeyCode::Tab);
        add(&mut app, "eth", "abc", "100");

        assert!(app.portfolio().holdings().is_empty());
        assert_eq!(app.focus(), DraftField::PurchasePrice);
        assert_eq!(app.portfolio().draft().amount, "abc");
    }

    #[test]
    fn back_tab_wraps_to_last_field() {
        let mut app = App::new(mock_portfolio());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus(), DraftField::PurchasePrice);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), DraftField::Symbol);
    }

    #[test]
    fn delete_removes_selected_row() {
        let mut app = App::new(mock_portfolio());
        press(&mut app, KeyCode::Tab);
        add(&mut app, "btc", "1", "40000");
        add(&mut app, "xyz", "2", "10");
        add(&mut app, "eth", "2", "2000");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.portfolio().holdings().len(), 3);

        // XYZ has no price, so only two rows can be selected.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected(), Some(1));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected(), Some(0));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected(), Some(1));

        press(&mut app, KeyCode::Char('d'));
        let symbols: Vec<&str> = app
            .portfolio()
            .holdings()
            .iter()
            .map(|h| h.symbol().as_str())
            .collect();
        assert_eq!(symbols, vec!["BTC", "XYZ"]);
        assert_eq!(app.selected(), Some(0));

        press(&mut app, KeyCode::Delete);
        assert_eq!(app.portfolio().holdings().len(), 1);
        assert_eq!(app.selected(), None);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.portfolio().holdings().len(), 1);
    }

    #[test]
    fn help_popup_swallows_next_key() {
        let mut app = App::new(mock_portfolio());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help());

        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(!app.show_help());
        assert_eq!(app.mode(), InputMode::Browse);
    }
}
