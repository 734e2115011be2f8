//! Date derivation for the payout form.
//!
//! The form derives three dates from the current date when it initializes,
//! and re-derives the vacation end date whenever the start date changes.

use chrono::{Datelike, Duration, NaiveDate};

/// Length of the derived vacation window, in calendar days.
pub const VACATION_DAYS: i64 = 30;

/// Default opening day of the salary period: day 2 of `today`'s month.
pub fn default_salary_from(today: NaiveDate) -> NaiveDate {
    // Every month has a day 2.
    today.with_day(2).unwrap_or(today)
}

/// Default vacation end date: `start` plus [`VACATION_DAYS`] calendar days.
pub fn default_vacation_end(start: NaiveDate) -> NaiveDate {
    start + Duration::days(VACATION_DAYS)
}

/// Whole days worked between the salary period opening and the vacation
/// start. Negative when the salary period opens after the vacation starts;
/// nothing validates against that.
pub fn working_days(
    salary_from: NaiveDate,
    vacation_start: NaiveDate,
) -> i64 {
    (vacation_start - salary_from).num_days()
}
