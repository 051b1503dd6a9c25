use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::{Error, Result};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// 00:00 UTC of the given day
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Whole nights between two instants, partial days rounding up.
///
/// Inverted or empty ranges yield 0.
pub fn nights_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let millis = end.signed_duration_since(start).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    let nights = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    u32::try_from(nights).unwrap_or(u32::MAX)
}

/// Parse a stay boundary stored either as `YYYY-MM-DD` (00:00 UTC of that
/// day) or as a full timestamp, keeping its time of day.
pub fn parse_stay_date(raw: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(raw)
}

/// Parse a timestamp stored as RFC3339, a naive ISO datetime (taken as UTC) or a bare date.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(midnight_utc(date));
    }
    Err(Error::InvalidDate(raw.to_string()))
}

/// Stay boundaries: bare dates stay bare on write, other instants keep their time.
pub mod serde_stay_date {
    use chrono::{DateTime, NaiveTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if at.time() == NaiveTime::MIN {
            serializer.serialize_str(&at.format("%Y-%m-%d").to_string())
        } else {
            serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_stay_date(&raw).map_err(serde::de::Error::custom)
    }
}

pub mod serde_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_nights_two_days() {
        let start = midnight_utc(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        let end = midnight_utc(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
        assert_eq!(nights_between(start, end), 2);
    }

    #[test]
    fn test_nights_partial_day_rounds_up() {
        let start = Utc.with_ymd_and_hms(2024, 1, 10, 15, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 12, 11, 0, 0).unwrap();
        assert_eq!(nights_between(start, end), 2);
    }

    #[test]
    fn test_nights_zero_span() {
        let day = midnight_utc(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(nights_between(day, day), 0);
    }

    #[test]
    fn test_parse_stay_date_bare_date_is_midnight() {
        let at = parse_stay_date("2024-03-05").unwrap();
        assert_eq!(at, midnight_utc(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()));
    }

    #[test]
    fn test_parse_stay_date_keeps_time_of_day() {
        let at = parse_stay_date("2024-03-05T14:30:00.000Z").unwrap();
        assert_eq!(at, Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(
            parse_timestamp("yesterday"),
            Err(Error::InvalidDate("yesterday".to_string()))
        );
    }
}
