// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar date combined with a time of day.

use crate::calendar::days_in_month;
use crate::codec;
use crate::date::{validate_date, Date};
use crate::error::DateTimeError;
use crate::instant::{CalendarPoint, CanonicalInstant};
use crate::range::Candidate;
use crate::time::{validate_time, Time};
use chrono::{NaiveDateTime, Utc, Weekday};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A validated date and time of day, whole seconds, no timezone.
///
/// # Examples
///
/// ```
/// use tempora::{CalendarPoint, Date, DateTime};
///
/// let dt: DateTime = "2025-05-06 20:21:22".parse()?;
/// assert_eq!(dt.date(), Date::new(2025, 5, 6)?);
/// assert!(dt.after(&Date::new(2025, 5, 6)?));
/// assert!(DateTime::new(2025, 2, 29, 0, 0, 0).is_err());
/// # Ok::<(), tempora::DateTimeError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    datetime: NaiveDateTime,
}

impl DateTime {
    /// Validating constructor.
    ///
    /// Fields are checked year, month, day, hour, minute, second; the first
    /// invalid one is reported and the rest are not inspected. The year is
    /// limited to `0..=`[`MAX_YEAR`](crate::MAX_YEAR) as for [`Date::new`].
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DateTimeError> {
        let date = validate_date(year, month, day)?;
        let time = validate_time(hour, minute, second)?;
        Ok(Self {
            datetime: date.and_time(time),
        })
    }

    /// Combine an already validated date and time.
    #[inline]
    pub fn from_parts(date: Date, time: Time) -> Self {
        Self {
            datetime: date.to_naive().and_time(time.to_naive()),
        }
    }

    /// Current date and time on the UTC clock, truncated to the second.
    pub fn now() -> Self {
        let now = Utc::now().naive_utc();
        Self::from_parts(
            Date::from_naive_unchecked(now.date()),
            Time::from_naive(now.time()),
        )
    }

    /// Wrap a chrono date-time, dropping any fraction of a second and
    /// rejecting years outside `0..=9999`.
    pub fn from_naive(datetime: NaiveDateTime) -> Result<Self, DateTimeError> {
        let date = Date::from_naive(datetime.date())?;
        Ok(Self::from_parts(date, Time::from_naive(datetime.time())))
    }

    /// Parse `YYYY-MM-DD HH:MM:SS`, also accepting a bare `YYYY-MM-DD` as midnight.
    pub fn parse_lenient(text: &str) -> Result<Self, DateTimeError> {
        codec::parse_date_time_lenient(text)
    }

    /// The calendar date part.
    #[inline]
    pub fn date(&self) -> Date {
        Date::from_naive_unchecked(self.datetime.date())
    }

    /// The time of day part.
    #[inline]
    pub fn time(&self) -> Time {
        Time::from_naive(self.datetime.time())
    }

    /// Calendar year, `0..=9999`.
    #[inline]
    pub fn year(&self) -> i32 {
        self.date().year()
    }

    /// Month, `1..=12`.
    #[inline]
    pub fn month(&self) -> u32 {
        self.date().month()
    }

    /// Day of the month, starting at 1.
    #[inline]
    pub fn day(&self) -> u32 {
        self.date().day()
    }

    /// Hour, `0..=23`.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.time().hour()
    }

    /// Minute, `0..=59`.
    #[inline]
    pub fn minute(&self) -> u32 {
        self.time().minute()
    }

    /// Second, `0..=59`.
    #[inline]
    pub fn second(&self) -> u32 {
        self.time().second()
    }

    /// Day of the week of the date part.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.date().weekday()
    }

    /// Saturday or Sunday.
    #[inline]
    pub fn is_weekend(&self) -> bool {
        self.date().is_weekend()
    }

    /// Length of this value's month.
    #[inline]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// The underlying chrono date-time.
    #[inline]
    pub const fn to_naive(&self) -> NaiveDateTime {
        self.datetime
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_date(f, self.datetime.date())?;
        f.write_str(" ")?;
        codec::write_time(f, self.datetime.time())
    }
}

impl FromStr for DateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_date_time(s)
    }
}

impl CalendarPoint for DateTime {
    const LABEL: &'static str = "date time";
    const RANGE_LABEL: &'static str = "date time range";

    #[inline]
    fn canonical_instant(&self) -> CanonicalInstant {
        CanonicalInstant::from_naive(self.datetime)
    }

    fn from_candidate(candidate: Candidate<'_>) -> Result<Self, DateTimeError> {
        match candidate {
            Candidate::Native(datetime) => Self::from_naive(datetime),
            Candidate::DateTime(datetime) => Ok(datetime),
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
impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        codec::deserialize_text(deserializer, Self::LABEL, |text| text.parse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime {
        DateTime::new(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn new_validates_every_field_in_order() {
        assert_eq!(
            DateTime::new(-1, 1, 1, 0, 0, 0),
            Err(DateTimeError::InvalidYear { year: -1 })
        );
        assert_eq!(
            DateTime::new(2024, 13, 1, 0, 0, 0),
            Err(DateTimeError::InvalidMonth { month: 13 })
        );
        assert!(matches!(
            DateTime::new(2023, 2, 29, 0, 0, 0),
            Err(DateTimeError::InvalidDay { max: 28, .. })
        ));
        assert_eq!(
            DateTime::new(2024, 1, 1, 24, 0, 0),
            Err(DateTimeError::InvalidHour { hour: 24 })
        );
        assert_eq!(
            DateTime::new(2024, 1, 1, 23, 60, 0),
            Err(DateTimeError::InvalidMinute { minute: 60 })
        );
        assert_eq!(
            DateTime::new(2024, 1, 1, 23, 59, 60),
            Err(DateTimeError::InvalidSecond { second: 60 })
        );
        // a bad day hides a bad hour
        assert!(matches!(
            DateTime::new(2024, 2, 30, 99, 0, 0),
            Err(DateTimeError::InvalidDay { .. })
        ));
    }

    #[test]
    fn accessors_and_parts() {
        let value = dt(2025, 5, 6, 20, 21, 22);
        assert_eq!(
            (value.year(), value.month(), value.day()),
            (2025, 5, 6)
        );
        assert_eq!(
            (value.hour(), value.minute(), value.second()),
            (20, 21, 22)
        );
        assert_eq!(value.date(), Date::new(2025, 5, 6).unwrap());
        assert_eq!(value.time(), Time::new(20, 21, 22).unwrap());
        assert_eq!(DateTime::from_parts(value.date(), value.time()), value);
    }

    #[test]
    fn weekend_uses_the_date_part() {
        assert!(dt(2024, 12, 21, 23, 59, 59).is_weekend());
        assert!(dt(2024, 12, 22, 0, 0, 0).is_weekend());
        assert!(!dt(2024, 12, 23, 12, 0, 0).is_weekend());
    }

    #[test]
    fn comparisons_use_seconds() {
        let a = dt(2024, 12, 25, 10, 0, 0);
        let b = dt(2024, 12, 25, 10, 0, 1);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(a.compare(&a), Ordering::Equal);
        assert!(a.before(&b));
        assert!(dt(2024, 12, 25, 10, 0, 0).equal(&a));
        assert!(!a.between(&a, &b));
    }

    #[test]
    fn compares_against_dates_at_midnight() {
        let midnight = dt(2024, 12, 25, 0, 0, 0);
        let date = Date::new(2024, 12, 25).unwrap();
        assert!(midnight.equal(&date));
        assert!(dt(2024, 12, 25, 0, 0, 1).after(&date));
    }

    #[test]
    fn text_roundtrip() {
        let value = dt(2025, 1, 31, 14, 15, 16);
        assert_eq!(value.to_string(), "2025-01-31 14:15:16");
        assert_eq!("2025-01-31 14:15:16".parse::<DateTime>(), Ok(value));
    }

    #[test]
    fn from_naive_checks_year_range() {
        let naive = chrono::NaiveDate::from_ymd_opt(10_000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            DateTime::from_naive(naive),
            Err(DateTimeError::InvalidYear { year: 10_000 })
        );
    }

    #[test]
    fn leap_second_roundtrips_through_text() {
        let leap = chrono::NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 1_500)
            .unwrap();
        let value = DateTime::from_naive(leap).unwrap();
        assert_eq!(value, dt(2016, 12, 31, 23, 59, 59));
        assert_eq!(value.to_string().parse::<DateTime>(), Ok(value));
        assert!(value.equal(&dt(2016, 12, 31, 23, 59, 59)));
    }

    #[test]
    fn now_has_whole_seconds() {
        let now = DateTime::now();
        assert_eq!(chrono::Timelike::nanosecond(&now.to_naive()), 0);
        assert_eq!(now.to_string().parse::<DateTime>(), Ok(now));
    }

    #[test]
    fn days_in_month_of_value() {
        assert_eq!(dt(2024, 2, 10, 8, 0, 0).days_in_month(), 29);
        assert_eq!(dt(2023, 2, 10, 8, 0, 0).days_in_month(), 28);
        assert_eq!(dt(2024, 4, 30, 23, 59, 59).days_in_month(), 30);
    }
}
