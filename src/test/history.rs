#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::{
        api::{HistorySource, MAX_HISTORY_DAYS, RandomWalkHistory},
        test::date,
    };

    #[test]
    fn history_covers_every_day_up_to_today() {
        let mut source = RandomWalkHistory::from_seed(Some(7));
        let history = source.generate(50_000.0, 30, date());

        assert_eq!(history.len(), 31);
        assert_eq!(*history[30].date(), date());
        assert_eq!(*history[0].date(), date() - chrono::Duration::days(30));
        assert!(history.windows(2).all(|pair| pair[0].date() < pair[1].date()));
    }

    #[test]
    fn each_step_moves_at_most_five_percent() {
        let mut source = RandomWalkHistory::new(StdRng::seed_from_u64(42));
        let history = source.generate(1_000.0, 60, date());

        let mut previous = 1_000.0;
        for point in &history {
            let ratio = point.price() / previous;
            assert!((0.949..=1.051).contains(&ratio));
            let noise = point.portfolio_value() - point.price() * 0.5;
            assert!((0.0..10_000.0).contains(&noise));
            previous = *point.price();
        }
    }

    #[test]
    fn same_seed_same_history() {
        let first = RandomWalkHistory::from_seed(Some(3)).generate(100.0, 10, date());
        let second = RandomWalkHistory::from_seed(Some(3)).generate(100.0, 10, date());

        assert_eq!(first, second);
    }

    #[test]
    fn zero_days_gives_today_only() {
        let history = RandomWalkHistory::from_seed(Some(1)).generate(100.0, 0, date());
        assert_eq!(history.len(), 1);
        assert_eq!(*history[0].date(), date());
    }

    #[test]
    fn long_requests_are_capped() {
        let history = RandomWalkHistory::from_seed(Some(5)).generate(100.0, u32::MAX, date());
        assert_eq!(history.len(), MAX_HISTORY_DAYS as usize + 1);
        assert_eq!(*history.last().unwrap().date(), date());
    }

    #[test]
    fn dates_before_the_calendar_start_are_skipped() {
        let start = chrono::NaiveDate::MIN + chrono::Days::new(3);
        let history = RandomWalkHistory::from_seed(Some(5)).generate(100.0, 10, start);

        assert_eq!(history.len(), 4);
        assert_eq!(*history[0].date(), chrono::NaiveDate::MIN);
        assert_eq!(*history[3].date(), start);
    }
}
