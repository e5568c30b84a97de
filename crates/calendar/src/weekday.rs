//! Monday-first weekday numbering.
//!
//! Host date facilities usually number weekdays from Sunday (0 = Sunday ...
//! 6 = Saturday). The wall-calendar grid starts its weeks on Monday, so every
//! weekday is converted once into the Monday-based index (0 = Monday ...
//! 6 = Sunday).

use chrono::{Datelike, NaiveDate};

/// Number of columns in a week row.
pub const DAYS_PER_WEEK: u32 = 7;

/// Converts a Sunday-based weekday index (0 = Sunday) into the Monday-based
/// index (0 = Monday, 6 = Sunday).
///
/// This is a permutation of `0..7`; inputs outside that range are reduced
/// modulo 7.
pub fn monday_index(sunday_index: u32) -> u32 {
    (sunday_index % DAYS_PER_WEEK + 6) % DAYS_PER_WEEK
}

/// Inverse of [`monday_index`].
pub fn sunday_index(monday_index: u32) -> u32 {
    (monday_index % DAYS_PER_WEEK + 1) % DAYS_PER_WEEK
}

/// Returns `true` for Saturday (5) and Sunday (6) in Monday-based numbering.
pub fn is_weekend(monday_index: u32) -> bool {
    matches!(monday_index, 5 | 6)
}

/// Returns the Monday-based weekday index of `date`.
pub fn weekday_of(date: NaiveDate) -> u32 {
    monday_index(date.weekday().num_days_from_sunday())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_maps_to_six() {
        assert_eq!(monday_index(0), 6);
    }

    #[test]
    fn monday_maps_to_zero() {
        assert_eq!(monday_index(1), 0);
    }

    #[test]
    fn saturday_maps_to_five() {
        assert_eq!(monday_index(6), 5);
    }

    #[test]
    fn transform_is_permutation() {
        let mut seen = [false; 7];
        for s in 0..7 {
            let m = monday_index(s) as usize;
            assert!(!seen[m], "index {m} produced twice");
            seen[m] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn inverse_roundtrip() {
        for s in 0..7 {
            assert_eq!(sunday_index(monday_index(s)), s);
        }
    }

    #[test]
    fn weekend_is_saturday_and_sunday() {
        let weekend: Vec<u32> = (0..7).filter(|&d| is_weekend(d)).collect();
        assert_eq!(weekend, vec![5, 6]);
    }

    #[test]
    fn weekday_of_known_dates() {
        // 2025-01-01 was a Wednesday.
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(weekday_of(date), 2);
        // 2025-01-19 was a Sunday.
        let date = NaiveDate::from_ymd_opt(2025, 1, 19).unwrap();
        assert_eq!(weekday_of(date), 6);
    }

    #[test]
    fn weekday_of_agrees_with_chrono_monday_numbering() {
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for _ in 0..400 {
            assert_eq!(weekday_of(date), date.weekday().num_days_from_monday());
            date = date.succ_opt().unwrap();
        }
    }
}
