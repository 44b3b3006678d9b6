use chrono::{Days, NaiveDate};

use super::LAST_DAY_INDEX;

/// Whole calendar days from `a` to `b`. Negative when `b` comes before `a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// Zero-based challenge day for `today`. Days before the start count as the first day and
/// anything past the end sticks to the last one.
pub fn challenge_index(start: NaiveDate, today: NaiveDate) -> usize {
    days_between(start, today).clamp(0, LAST_DAY_INDEX as i64) as usize
}

pub fn challenge_date(start: NaiveDate, index: usize) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(index as u64))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{challenge_date, challenge_index, days_between};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 4)), 3);
        assert_eq!(days_between(date(2024, 1, 4), date(2024, 1, 1)), -3);
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(days_between(date(2023, 12, 31), date(2024, 1, 1)), 1);
    }

    #[test]
    fn test_challenge_index_is_clamped() {
        let start = date(2024, 1, 1);
        assert_eq!(challenge_index(start, date(2023, 12, 1)), 0);
        assert_eq!(challenge_index(start, start), 0);
        assert_eq!(challenge_index(start, date(2024, 1, 4)), 3);
        assert_eq!(challenge_index(start, date(2024, 3, 15)), 74);
        assert_eq!(challenge_index(start, date(2024, 3, 16)), 74);
        assert_eq!(challenge_index(start, date(2025, 1, 1)), 74);
    }

    #[test]
    fn test_challenge_date_crosses_months() {
        let start = date(2024, 1, 30);
        assert_eq!(challenge_date(start, 0), Some(start));
        assert_eq!(challenge_date(start, 2), Some(date(2024, 2, 1)));
        assert_eq!(challenge_date(start, 31), Some(date(2024, 3, 1)));
    }
}
