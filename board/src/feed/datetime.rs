//! Timestamp parsing and display

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

/// Parse a feed timestamp.
///
/// Accepts RFC 3339, a zone-less `YYYY-MM-DDTHH:MM:SS[.fff]` (read as wall
/// time in `local`) and a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(raw: &str, local: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_local_timezone(local).single();
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Formats timestamps the way a US-English browser's `toLocaleString` does,
/// in a fixed display zone
#[derive(Debug, Clone, Copy)]
pub struct TimestampFormatter {
    offset: FixedOffset,
}

impl TimestampFormatter {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Display zone, also the zone assumed for zone-less timestamps
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// e.g. `1/1/2024, 12:00:00 AM`
    pub fn format(&self, ts: &DateTime<FixedOffset>) -> String {
        ts.with_timezone(&self.offset)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_variants() {
        let z = parse_timestamp("2024-01-01T00:00:00Z", Utc.fix()).unwrap();
        let offset = parse_timestamp("2024-01-01T00:00:00+00:00", Utc.fix()).unwrap();
        assert_eq!(z, offset);

        let fractional = parse_timestamp("2024-03-05T14:07:09.123456+00:00", Utc.fix()).unwrap();
        assert_eq!(fractional.timestamp(), 1709647629);
    }

    #[test]
    fn zone_less_is_local_wall_time() {
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();

        let naive = parse_timestamp("2024-01-01T08:30:00", eastern).unwrap();

        assert_eq!(naive, parse_timestamp("2024-01-01T13:30:00Z", Utc.fix()).unwrap());
        assert_eq!(
            TimestampFormatter::new(eastern).format(&naive),
            "1/1/2024, 8:30:00 AM"
        );
    }

    #[test]
    fn date_only_is_midnight_utc() {
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();

        let date = parse_timestamp("2024-01-01", eastern).unwrap();

        assert_eq!(date, parse_timestamp("2024-01-01T00:00:00Z", Utc.fix()).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday", Utc.fix()).is_none());
        assert!(parse_timestamp("", Utc.fix()).is_none());
        assert!(parse_timestamp("2024-13-40", Utc.fix()).is_none());
    }

    #[test]
    fn formats_like_en_us_locale() {
        let ts = parse_timestamp("2024-01-01T00:00:00Z", Utc.fix()).unwrap();
        assert_eq!(TimestampFormatter::utc().format(&ts), "1/1/2024, 12:00:00 AM");

        let ts = parse_timestamp("2024-11-23T15:04:05Z", Utc.fix()).unwrap();
        assert_eq!(TimestampFormatter::utc().format(&ts), "11/23/2024, 3:04:05 PM");
    }

    #[test]
    fn formats_in_display_zone() {
        let eastern = TimestampFormatter::new(FixedOffset::west_opt(5 * 3600).unwrap());
        let ts = parse_timestamp("2024-01-01T00:00:00Z", Utc.fix()).unwrap();
        assert_eq!(eastern.format(&ts), "12/31/2023, 7:00:00 PM");
    }
}
