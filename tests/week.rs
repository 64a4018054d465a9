#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Weekday};
    use recap::libs::week::BusinessWeek;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_for_midweek_date() {
        // Wednesday June 11, 2025
        let week = BusinessWeek::for_date(date(2025, 6, 11));

        assert_eq!(week.start.date(), date(2025, 6, 9));
        assert_eq!(week.end.date(), date(2025, 6, 15));
        assert_eq!(week.start.format("%H:%M:%S").to_string(), "00:00:00");
        assert_eq!(week.end.format("%H:%M:%S").to_string(), "23:59:59");
    }

    #[test]
    fn test_week_starts_on_monday_for_any_weekday() {
        // Every day of one calendar week maps to the same window
        let monday = date(2025, 6, 9);
        for offset in 0..7 {
            let week = BusinessWeek::for_date(monday + Duration::days(offset));
            assert_eq!(week.start.date(), monday);
            assert_eq!(week.start.date().weekday(), Weekday::Mon);
            assert_eq!(week.end.date().weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_week_for_sunday_keeps_preceding_monday() {
        let week = BusinessWeek::for_date(date(2025, 6, 15));
        assert_eq!(week.start.date(), date(2025, 6, 9));
    }

    #[test]
    fn test_week_spans_month_boundary() {
        // Saturday August 2, 2025 belongs to the week starting July 28
        let week = BusinessWeek::for_date(date(2025, 8, 2));
        assert_eq!(week.start.date(), date(2025, 7, 28));
        assert_eq!(week.end.date(), date(2025, 8, 3));
    }

    #[test]
    fn test_previous_week() {
        let week = BusinessWeek::previous(date(2025, 6, 11));
        assert_eq!(week.start.date(), date(2025, 6, 2));
        assert_eq!(week.end.date(), date(2025, 6, 8));
    }

    #[test]
    fn test_weeks_back_count_and_order() {
        let weeks = BusinessWeek::weeks_back(4);
        assert_eq!(weeks.len(), 4);

        for pair in weeks.windows(2) {
            assert_eq!(pair[1].start - pair[0].start, Duration::days(7));
        }
    }

    #[test]
    fn test_weeks_back_excludes_current_week() {
        let current = BusinessWeek::current();
        let weeks = BusinessWeek::weeks_back(3);

        for week in &weeks {
            assert!(week.end < current.start);
        }
        // The most recent returned week is the one directly before this one
        assert_eq!(weeks.last().unwrap().start + Duration::days(7), current.start);
    }

    #[test]
    fn test_weeks_back_zero() {
        assert!(BusinessWeek::weeks_back(0).is_empty());
    }

    #[test]
    fn test_current_to_date_never_extends_into_future() {
        let week = BusinessWeek::current_to_date();
        let now = Local::now().naive_local();

        assert_eq!(week.start.date().weekday(), Weekday::Mon);
        assert!(week.start <= week.end);
        assert!(week.end <= now);
    }

    #[test]
    fn test_contains_is_inclusive_at_bounds() {
        let week = BusinessWeek::for_date(date(2025, 6, 11));

        assert!(week.contains(week.start));
        assert!(week.contains(week.end));
        assert!(!week.contains(week.start - Duration::seconds(1)));
        assert!(!week.contains(week.end + Duration::seconds(1)));
    }

    #[test]
    fn test_contains_midweek_timestamp() {
        let week = BusinessWeek::for_date(date(2025, 6, 11));
        let ts: NaiveDateTime = date(2025, 6, 12).and_hms_opt(14, 30, 0).unwrap();
        assert!(week.contains(ts));
    }

    #[test]
    fn test_week_of_is_monday() {
        let week = BusinessWeek::for_date(date(2025, 1, 8));
        assert_eq!(week.week_of(), date(2025, 1, 6));
    }

    #[test]
    fn test_display_format() {
        let week = BusinessWeek::for_date(date(2025, 1, 8));
        assert_eq!(week.to_string(), "Jan 6 - Jan 12, 2025");
    }

    #[test]
    fn test_display_format_across_year_boundary() {
        // Week containing New Year's Day 2025 starts in December 2024
        let week = BusinessWeek::for_date(date(2025, 1, 1));
        assert_eq!(week.to_string(), "Dec 30 - Jan 5, 2025");
    }
}
