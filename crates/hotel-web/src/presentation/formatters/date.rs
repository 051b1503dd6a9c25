use chrono::{DateTime, NaiveDate, Utc};

/// `2024-01-10` -> `Jan 10, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Creation timestamps keep the time of day: `Jan 1, 2024 09:30 UTC`
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M UTC").to_string()
}
