//! Calendar-aware age between two dates.

use chrono::{Datelike, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeError {
    BirthAfterTarget { birth: NaiveDate, target: NaiveDate },
}

impl Display for AgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BirthAfterTarget { birth, target } => {
                write!(f, "birth date {birth} is after target date {target}")
            }
        }
    }
}

impl Error for AgeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: i32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
    pub total_weeks: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub next_birthday: NaiveDate,
    /// Zero when the target date is the birthday itself.
    pub days_to_next_birthday: i64,
}

/// Age of someone born on `birth` as of `target`.
///
/// Negative day differences borrow the length of the month before `target`;
/// negative month differences borrow a year.
pub fn compute_age(birth: NaiveDate, target: NaiveDate) -> Result<Age, AgeError> {
    if birth > target {
        return Err(AgeError::BirthAfterTarget { birth, target });
    }

    let mut years = target.year() - birth.year();
    let mut months = target.month() as i32 - birth.month() as i32;
    let mut days = target.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_previous_month(target) as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let total_days = (target - birth).num_days();
    let total_hours = total_days * 24;

    let mut next_birthday = anniversary(birth, target.year());
    if next_birthday < target {
        next_birthday = anniversary(birth, target.year() + 1);
    }

    Ok(Age {
        years,
        months: months as u32,
        days: days as u32,
        total_days,
        total_weeks: total_days / 7,
        total_hours,
        total_minutes: total_hours * 60,
        next_birthday,
        days_to_next_birthday: (next_birthday - target).num_days(),
    })
}

/// Days in the calendar month preceding `date`'s month.
pub fn days_in_previous_month(date: NaiveDate) -> u32 {
    match date.with_day(1).and_then(|first| first.pred_opt()) {
        Some(last_of_previous) => last_of_previous.day(),
        None => 31,
    }
}

/// Birthday in `year`; Feb 29 falls on Mar 1 in common years.
fn anniversary(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}
