//! Custom serde helpers for backend wire formats.

/// Deserializes an optional order timestamp into `NaiveDateTime`.
///
/// The broker sends `"YYYY-MM-DD HH:MM:SS"` in exchange-local time; some
/// gateways send RFC 3339 instead, which is normalized to UTC. `null`, empty
/// and unparseable strings map to `None` so one odd row cannot sink a whole
/// order list.
pub mod broker_timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        NaiveDateTime::parse_from_str(s, FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{NaiveDate, Timelike};

        #[test]
        fn test_parse_broker_format() {
            let ts = parse("2024-03-15 09:15:02").unwrap();
            assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
            assert_eq!(ts.second(), 2);
        }

        #[test]
        fn test_parse_rfc3339_to_utc() {
            let ts = parse("2024-03-15T09:15:00+05:30").unwrap();
            assert_eq!(ts.hour(), 3);
            assert_eq!(ts.minute(), 45);
        }

        #[test]
        fn test_parse_rejects_garbage() {
            assert_eq!(parse(""), None);
            assert_eq!(parse("yesterday"), None);
        }
    }
}
