//! # Daily Word
//!
//! Every caller sees the same word on the same calendar date:
//!
//! ```text
//! index = (year * 366 + month * 31 + day) mod N
//! ```
//!
//! where `N` is the number of words. The rotation is not uniform and can
//! repeat across month or year boundaries. Changing `N` remaps every date.

use std::num::NonZeroUsize;

use chrono::{Datelike, NaiveDate};

pub fn daily_index(date: NaiveDate, word_count: NonZeroUsize) -> usize {
    let day_number =
        i64::from(date.year()) * 366 + i64::from(date.month()) * 31 + i64::from(date.day());

    // rem_euclid keeps pre-epoch years in range too
    day_number.rem_euclid(word_count.get() as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn count(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_known_dates() {
        // 2024 * 366 + 1 * 31 + 1 = 740816
        assert_eq!(daily_index(date(2024, 1, 1), count(25)), 16);
        // 2025 * 366 + 12 * 31 + 31 = 741553
        assert_eq!(daily_index(date(2025, 12, 31), count(25)), 3);
    }

    #[test]
    fn test_always_in_range() {
        let mut day = date(2020, 1, 1);
        let end = date(2030, 1, 1);

        while day < end {
            assert!(daily_index(day, count(25)) < 25);
            assert_eq!(daily_index(day, count(1)), 0);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_collision() {
        // 25 days apart within one month share an index
        assert_eq!(
            daily_index(date(2024, 1, 1), count(25)),
            daily_index(date(2024, 1, 26), count(25))
        );
    }

    #[test]
    fn test_negative_year() {
        assert!(daily_index(date(-44, 3, 15), count(25)) < 25);
    }
}
