// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Gregorian Easter Sunday and the feasts fixed relative to it.
//!
//! Uses Gauss's algorithm with the per-century `(M, N)` corrections. The
//! table only covers 1700–2099; other years fall back to `(1, 1)` and give
//! a best-effort date (see [`is_calibrated`]).

use crate::calendar::normalized_date;
use crate::date::{Date, MAX_YEAR};
use crate::error::DateTimeError;
use tracing::debug;

/// `(M, N)` Gauss corrections for the century containing `year`.
const fn century_correction(year: i32) -> Option<(u32, u32)> {
    match year {
        1700..=1799 => Some((23, 3)),
        1800..=1899 => Some((23, 4)),
        1900..=2099 => Some((24, 5)),
        _ => None,
    }
}

/// Whether `year` is covered by the century correction table.
///
/// Outside it, [`easter_sunday`] still answers but the result is not
/// guaranteed to be the ecclesiastical Easter.
#[inline]
pub const fn is_calibrated(year: i32) -> bool {
    century_correction(year).is_some()
}

/// `(month, day)` of Easter Sunday for an already validated year.
fn month_day(year: i32) -> (u32, u32) {
    let (m, n) = century_correction(year).unwrap_or_else(|| {
        debug!(year, "easter year outside calibrated century table");
        (1, 1)
    });
    let year = year.unsigned_abs();
    let a = year % 19;
    let b = year % 4;
    let c = year % 7;
    let d = (19 * a + m) % 30;
    let e = (n + 2 * b + 4 * c + 6 * d) % 7;

    let s1 = 22 + d + e;
    if s1 <= 31 {
        return (3, s1);
    }
    // s1 > 31 implies d + e >= 10
    let s2 = d + e - 9;
    if s2 == 25 && d == 28 && e == 6 && a > 10 {
        (4, 18)
    } else if s2 <= 25 {
        (4, s2)
    } else {
        (4, s2 - 7)
    }
}

fn shifted_easter(year: i32, days: i64) -> Result<Date, DateTimeError> {
    if !(0..=MAX_YEAR).contains(&year) {
        return Err(DateTimeError::InvalidYear { year });
    }
    let (month, day) = month_day(year);
    let date = normalized_date(year, month, i64::from(day) + days)
        .ok_or(DateTimeError::InvalidYear { year })?;
    Date::from_naive(date)
}

/// Easter Sunday of `year`.
///
/// # Errors
///
/// [`DateTimeError::InvalidYear`] when `year` is outside `0..=9999`.
///
/// # Examples
///
/// ```
/// use tempora::easter::easter_sunday;
///
/// assert_eq!(easter_sunday(2024)?.to_string(), "2024-03-31");
/// # Ok::<(), tempora::DateTimeError>(())
/// ```
pub fn easter_sunday(year: i32) -> Result<Date, DateTimeError> {
    shifted_easter(year, 0)
}

/// Good Friday of `year`, two days before Easter Sunday.
pub fn good_friday(year: i32) -> Result<Date, DateTimeError> {
    shifted_easter(year, -2)
}

/// Easter Monday of `year`, the day after Easter Sunday.
pub fn easter_monday(year: i32) -> Result<Date, DateTimeError> {
    shifted_easter(year, 1)
}
