use chrono::{Duration, Local, NaiveDate};

/// Calendar day in the user's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// First day of a window reaching `days` back from `today`, inclusive.
pub fn window_start(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days)
}

pub fn in_window(date: NaiveDate, today: NaiveDate, days: i64) -> bool {
    date >= window_start(today, days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_start_crosses_month() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(window_start(today, 7), NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
    }

    #[test]
    fn test_in_window_is_inclusive() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert!(in_window(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(), today, 7));
        assert!(!in_window(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(), today, 7));
        // Future-dated records count as recent.
        assert!(in_window(NaiveDate::from_ymd_opt(2024, 3, 25).unwrap(), today, 7));
    }
}
