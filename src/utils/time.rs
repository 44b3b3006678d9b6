use chrono::NaiveDate;

/// This is the standard way of converting a date to a string in seventyfive.
pub fn date_to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{date_to_iso, parse_iso};

    #[test]
    fn test_iso_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(date_to_iso(date), "2024-03-09");
        assert_eq!(parse_iso(" 2024-03-09 "), Some(date));
        assert_eq!(parse_iso("09/03/2024"), None);
    }
}
