//! Calendar helpers for `YYYYMMDD` attestation dates.
//!
//! Dates are compared as day numbers since the Unix epoch so the freshness
//! window spans month and year boundaries correctly.

pub const SECONDS_PER_DAY: u64 = 86_400;

const MIN_YEAR: u32 = 1970;
const MAX_YEAR: u32 = 9999;

/// Day number (days since 1970-01-01) of a block timestamp.
pub fn day_number_from_timestamp(timestamp: u64) -> u64 {
    timestamp / SECONDS_PER_DAY
}

/// `YYYYMMDD` of the UTC day containing `timestamp`.
pub fn date_from_timestamp(timestamp: u64) -> u32 {
    let (year, month, day) = civil_from_days(day_number_from_timestamp(timestamp));
    year * 10_000 + month * 100 + day
}

/// Day number of a `YYYYMMDD` value, or `None` when it is not a real
/// calendar day on or after 1970-01-01.
pub fn day_number_from_date(date: u32) -> Option<u64> {
    let year = date / 10_000;
    let month = (date / 100) % 100;
    let day = date % 100;

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
        return None;
    }
    if day == 0 || day > days_in_month(year, month) {
        return None;
    }

    Some(days_from_civil(year, month, day))
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// Era-based conversion; years start in March so the leap day is last.
fn days_from_civil(year: u32, month: u32, day: u32) -> u64 {
    let y = (if month <= 2 { year - 1 } else { year }) as u64;
    let era = y / 400;
    let yoe = y - era * 400;
    let mp = ((month + 9) % 12) as u64;
    let doy = (153 * mp + 2) / 5 + day as u64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: u64) -> (u32, u32, u32) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = (yoe + era * 400) as u32 + u32::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(day_number_from_date(19700101), Some(0));
        assert_eq!(date_from_timestamp(0), 19700101);
    }

    #[test]
    fn timestamp_maps_to_calendar_day() {
        // 2025-03-15T12:00:00Z
        assert_eq!(date_from_timestamp(1_742_040_000), 20250315);
        assert_eq!(day_number_from_timestamp(1_742_040_000), 20_162);
        assert_eq!(day_number_from_date(20250315), Some(20_162));
    }

    #[test]
    fn leap_days() {
        assert!(day_number_from_date(20240229).is_some());
        assert!(day_number_from_date(20250229).is_none());
        assert!(day_number_from_date(20000229).is_some());
        assert!(day_number_from_date(21000229).is_none());
        assert_eq!(
            day_number_from_date(20240301).unwrap() - day_number_from_date(20240228).unwrap(),
            2
        );
    }

    #[test]
    fn spans_year_boundary() {
        let dec = day_number_from_date(20241229).unwrap();
        let jan = day_number_from_date(20250102).unwrap();
        assert_eq!(jan - dec, 4);
        assert_eq!(date_from_timestamp(jan * SECONDS_PER_DAY), 20250102);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(day_number_from_date(0).is_none());
        assert!(day_number_from_date(19691231).is_none());
        assert!(day_number_from_date(20251301).is_none());
        assert!(day_number_from_date(20250100).is_none());
        assert!(day_number_from_date(20250431).is_none());
    }

    #[test]
    fn round_trips_through_timestamps() {
        for day in [0u64, 59, 365, 10_956, 20_162, 47_482] {
            let date = date_from_timestamp(day * SECONDS_PER_DAY + 3_600);
            assert_eq!(day_number_from_date(date), Some(day));
        }
    }
}
