//! Date-derived field values.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Whole days from 1970-01-01 to `now`. Dates before the epoch clamp to 0.
pub fn day_count_since_epoch(now: DateTime<Utc>) -> u64 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch date");
    let days = now.date_naive().signed_duration_since(epoch).num_days();
    days.max(0) as u64
}

/// `(ISO week number << 8) | (ISO year mod 100)`.
///
/// Uses the ISO week-date year, which can differ from the calendar year
/// around January 1st.
pub fn iso_week_year(now: DateTime<Utc>) -> u64 {
    let iso = now.date_naive().iso_week();
    let week = u64::from(iso.week());
    let year = iso.year().rem_euclid(100) as u64;
    (week << 8) | year
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_count_at_epoch() {
        let now = Utc.with_ymd_and_hms(1970, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(day_count_since_epoch(now), 0);
    }

    #[test]
    fn test_day_count_known_date() {
        // 1970-01-11 is ten days after the epoch
        let now = Utc.with_ymd_and_hms(1970, 1, 11, 0, 0, 0).unwrap();
        assert_eq!(day_count_since_epoch(now), 10);
    }

    #[test]
    fn test_day_count_clamps_before_epoch() {
        let now = Utc.with_ymd_and_hms(1969, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(day_count_since_epoch(now), 0);
    }

    #[test]
    fn test_iso_week_year_packing() {
        // 2024-07-01 is ISO week 27 of 2024
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(iso_week_year(now), (27 << 8) | 24);
    }

    #[test]
    fn test_iso_week_year_uses_iso_year() {
        // 2021-01-01 belongs to ISO week 53 of 2020
        let now = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(iso_week_year(now), (53 << 8) | 20);
    }
}
