#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use replan::libs::week::{shift_weeks, week_range_label, week_window};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_window_starts_monday_ends_sunday() {
        // Midweek, on a Monday, on a Sunday, and across a year boundary.
        for reference in [
            date(2024, 6, 12),
            date(2024, 1, 1),
            date(2023, 12, 31),
            date(2025, 3, 1),
        ] {
            let window = week_window(reference);
            assert_eq!(window[0].weekday(), Weekday::Mon);
            assert_eq!(window[6].weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_window_days_are_consecutive() {
        let window = week_window(date(2024, 6, 12));
        for pair in window.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_window_contains_reference_date() {
        let reference = date(2024, 6, 12);
        assert!(week_window(reference).contains(&reference));
    }

    #[test]
    fn test_same_window_for_every_day_of_the_week() {
        let monday_window = week_window(date(2024, 6, 10));
        for offset in 0..7 {
            let other = week_window(date(2024, 6, 10) + Duration::days(offset));
            assert_eq!(other, monday_window);
        }
    }

    #[test]
    fn test_year_boundary_window() {
        // 2023-12-31 was a Sunday; its week starts on Christmas Day.
        let window = week_window(date(2023, 12, 31));
        assert_eq!(window[0], date(2023, 12, 25));
        assert_eq!(window[6], date(2023, 12, 31));
    }

    #[test]
    fn test_navigation_shifts_by_whole_weeks() {
        let reference = date(2024, 6, 12);
        let next = week_window(shift_weeks(reference, 1));
        let prev = week_window(shift_weeks(reference, -1));
        let current = week_window(reference);
        assert_eq!(next[0], current[0] + Duration::days(7));
        assert_eq!(prev[0], current[0] - Duration::days(7));
    }

    #[test]
    fn test_range_label_covers_monday_to_sunday() {
        let window = week_window(date(2024, 1, 3));
        assert_eq!(week_range_label(&window), "01 Jan 2024 - 07 Jan 2024");
    }
}
