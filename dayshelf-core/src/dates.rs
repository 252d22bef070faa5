use chrono::{Duration, Local, NaiveDate};

/// The on-disk key format. Lexicographic order on these strings is
/// chronological order, which the grouped views rely on.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as a document key, e.g. `2025-01-31`.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a document key back into a date. Returns `None` for anything that
/// is not a valid `YYYY-MM-DD` string.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// The local calendar date new entries land on by default.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a user-supplied date argument: an ISO date, or the keywords
/// `today` / `yesterday`.
pub fn parse_date_arg(input: &str) -> Option<NaiveDate> {
    match input.trim().to_lowercase().as_str() {
        "today" => Some(today()),
        "yesterday" => Some(today() - Duration::days(1)),
        other => parse_date_key(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(date_key(d), "2025-01-31");
        assert_eq!(parse_date_key("2025-01-31"), Some(d));
    }

    #[test]
    fn rejects_malformed_keys() {
        assert_eq!(parse_date_key("31/01/2025"), None);
        assert_eq!(parse_date_key("2025-13-01"), None);
        assert_eq!(parse_date_key("not-a-date"), None);
    }

    #[test]
    fn date_arg_accepts_keywords() {
        assert_eq!(parse_date_arg("today"), Some(today()));
        assert_eq!(
            parse_date_arg("Yesterday"),
            Some(today() - Duration::days(1))
        );
        assert_eq!(
            parse_date_arg("2025-08-01"),
            NaiveDate::from_ymd_opt(2025, 8, 1)
        );
        assert_eq!(parse_date_arg("someday"), None);
    }
}
