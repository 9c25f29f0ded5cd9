// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar date without a time of day.

use crate::calendar::days_in_month;
use crate::codec;
use crate::datetime::DateTime;
use crate::error::DateTimeError;
use crate::instant::{CalendarPoint, CanonicalInstant};
use crate::range::Candidate;
use crate::time::Time;
use chrono::{Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest year the four-digit canonical text can carry.
pub const MAX_YEAR: i32 = 9999;

/// Validate year, month and day in that order.
pub(crate) fn validate_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateTimeError> {
    if !(0..=MAX_YEAR).contains(&year) {
        return Err(DateTimeError::InvalidYear { year });
    }
    if !(1..=12).contains(&month) {
        return Err(DateTimeError::InvalidMonth { month });
    }
    let max = days_in_month(year, month);
    let invalid_day = DateTimeError::InvalidDay {
        year,
        month,
        day,
        max,
    };
    if !(1..=max).contains(&day) {
        return Err(invalid_day);
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(invalid_day)
}

/// A validated Gregorian date, `0000-01-01` through `9999-12-31`.
///
/// # Examples
///
/// ```
/// use tempora::{CalendarPoint, Date};
///
/// let christmas = Date::new(2024, 12, 25)?;
/// let boxing_day: Date = "2024-12-26".parse()?;
///
/// assert!(christmas.before(&boxing_day));
/// assert_eq!(christmas.to_string(), "2024-12-25");
/// assert!(Date::new(2024, 2, 30).is_err());
/// # Ok::<(), tempora::DateTimeError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    date: NaiveDate,
}

impl Date {
    /// Validating constructor.
    ///
    /// Fails with the first invalid field: `InvalidYear`, then
    /// `InvalidMonth`, then `InvalidDay`.
    ///
    /// The year must lie in `0..=`[`MAX_YEAR`]: the canonical text has a
    /// four-digit year, so `Date::new(10000, 1, 1)` is `InvalidYear`.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateTimeError> {
        validate_date(year, month, day).map(|date| Self { date })
    }

    /// Today's date on the UTC clock.
    pub fn today() -> Self {
        Self {
            date: Utc::now().date_naive(),
        }
    }

    /// Wrap a chrono date, rejecting years outside `0..=9999`.
    pub fn from_naive(date: NaiveDate) -> Result<Self, DateTimeError> {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Parse `YYYY-MM-DD`, also accepting a trailing ` HH:MM:SS` that is
    /// validated and then discarded.
    pub fn parse_lenient(text: &str) -> Result<Self, DateTimeError> {
        codec::parse_date_lenient(text)
    }

    /// Calendar year, `0..=9999`.
    #[inline]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month, `1..=12`.
    #[inline]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of the month, starting at 1.
    #[inline]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Day of the week.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Saturday or Sunday.
    #[inline]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Length of this date's month.
    #[inline]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Combine with a time of day.
    #[inline]
    pub fn and_time(&self, time: Time) -> DateTime {
        DateTime::from_parts(*self, time)
    }

    /// The underlying chrono date.
    #[inline]
    pub const fn to_naive(&self) -> NaiveDate {
        self.date
    }

    /// Crate-internal: `date` is known to be in range.
    #[inline]
    pub(crate) const fn from_naive_unchecked(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_date(f, self.date)
    }
}

impl FromStr for Date {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_date(s)
    }
}

impl CalendarPoint for Date {
    const LABEL: &'static str = "date";
    const RANGE_LABEL: &'static str = "date range";

    #[inline]
    fn canonical_instant(&self) -> CanonicalInstant {
        CanonicalInstant::from_naive(self.date.and_time(NaiveTime::MIN))
    }

    fn from_candidate(candidate: Candidate<'_>) -> Result<Self, DateTimeError> {
        match candidate {
            Candidate::Native(datetime) => Self::from_naive(datetime.date()),
            Candidate::Date(date) => Ok(date),
            Candidate::Text(text) => text.parse(),
            other => Err(DateTimeError::UnsupportedInputKind {
                expected: Self::LABEL,
                found: other.label(),
            }),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        codec::deserialize_text(deserializer, Self::LABEL, |text| text.parse())
    }
}
