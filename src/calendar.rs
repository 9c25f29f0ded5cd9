// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar primitives.
//!
//! These helpers assume their inputs were validated by the caller: a month
//! outside `1..=12` is not an error here, it simply has no days.

use chrono::{NaiveDate, TimeDelta};

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// Returns `0` for a month outside `1..=12`.
///
/// # Examples
///
/// ```
/// use tempora::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2023, 4), 30);
/// ```
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Day numbers `1..=days_in_month(year, month)`, freshly built on every call.
pub fn days_in_month_list(year: i32, month: u32) -> Vec<u32> {
    (1..=days_in_month(year, month)).collect()
}

/// Builds a date from a day offset that may overflow or underflow the month.
///
/// `day` counts from the first of `month`, so `0` is the last day of the
/// previous month and `32` of January is the first of February. Returns
/// `None` when `month` is invalid or the result leaves chrono's range.
pub fn normalized_date(year: i32, month: u32, day: i64) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(TimeDelta::try_days(day - 1)?)
}
