//! Calendar facts shown next to the clock.

use chrono::{Datelike, NaiveDate};

/// One-based day number within the year.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// One-based week of the month, counting days 1-7 as week one.
pub fn week_of_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

#[cfg(test)]
mod tests {
    use super::{day_of_year, is_leap_year, week_of_month};
    use chrono::NaiveDate;

    #[test]
    fn day_and_week_numbers_are_one_based() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(day_of_year(date), 61);
        assert_eq!(week_of_month(date), 1);
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(week_of_month(date), 3);
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }
}
