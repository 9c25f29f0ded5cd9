// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time of day without a date, whole seconds, 24-hour clock.

use crate::codec;
use crate::error::DateTimeError;
use crate::instant::{CalendarPoint, CanonicalInstant};
use crate::range::Candidate;
use chrono::{NaiveTime, TimeDelta, Timelike, Utc};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Validate hour, minute and second in that order.
pub(crate) fn validate_time(hour: u32, minute: u32, second: u32) -> Result<NaiveTime, DateTimeError> {
    if hour > 23 {
        return Err(DateTimeError::InvalidHour { hour });
    }
    if minute > 59 {
        return Err(DateTimeError::InvalidMinute { minute });
    }
    if second > 59 {
        return Err(DateTimeError::InvalidSecond { second });
    }
    NaiveTime::from_hms_opt(hour, minute, second).ok_or(DateTimeError::InvalidSecond { second })
}

/// A validated time of day, `00:00:00` through `23:59:59`.
///
/// On the canonical axis a `Time` sits on the epoch day `0000-01-01`, so it
/// orders before every [`Date`](crate::Date) except that one.
///
/// # Examples
///
/// ```
/// use tempora::{CalendarPoint, Time};
///
/// let start = Time::new(9, 0, 0)?;
/// let end: Time = "17:30:00".parse()?;
/// let lunch = Time::new(12, 15, 0)?;
///
/// assert!(lunch.between(&start, &end));
/// assert_eq!(lunch.to_string(), "12:15:00");
/// # Ok::<(), tempora::DateTimeError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    time: NaiveTime,
}

impl Time {
    /// `00:00:00`.
    pub const MIDNIGHT: Self = Self {
        time: NaiveTime::MIN,
    };

    /// Validating constructor.
    ///
    /// Fails with the first invalid field: `InvalidHour`, then
    /// `InvalidMinute`, then `InvalidSecond`.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, DateTimeError> {
        validate_time(hour, minute, second).map(|time| Self { time })
    }

    /// Current time of day on the UTC clock, truncated to the second.
    pub fn now() -> Self {
        Self::from_naive(Utc::now().time())
    }

    /// Wrap a chrono time, dropping any fraction of a second.
    ///
    /// A leap second (`23:59:59` with a fraction of one second or more)
    /// collapses onto `23:59:59`.
    pub fn from_naive(time: NaiveTime) -> Self {
        // num_seconds_from_midnight ignores the leap fraction
        let seconds = TimeDelta::seconds(i64::from(time.num_seconds_from_midnight()));
        Self {
            time: NaiveTime::MIN.overflowing_add_signed(seconds).0,
        }
    }

    /// Parse `HH:MM:SS`, also accepting a leading `YYYY-MM-DD ` that is
    /// validated and then discarded.
    pub fn parse_lenient(text: &str) -> Result<Self, DateTimeError> {
        codec::parse_time_lenient(text)
    }

    /// Hour, `0..=23`.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Minute, `0..=59`.
    #[inline]
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Second, `0..=59`.
    #[inline]
    pub fn second(&self) -> u32 {
        self.time.second()
    }

    /// The underlying chrono time.
    #[inline]
    pub const fn to_naive(&self) -> NaiveTime {
        self.time
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_time(f, self.time)
    }
}

impl FromStr for Time {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_time(s)
    }
}

impl CalendarPoint for Time {
    const LABEL: &'static str = "time";
    const RANGE_LABEL: &'static str = "time range";

    #[inline]
    fn canonical_instant(&self) -> CanonicalInstant {
        CanonicalInstant::from_seconds(i64::from(self.time.num_seconds_from_midnight()))
    }

    fn from_candidate(candidate: Candidate<'_>) -> Result<Self, DateTimeError> {
        match candidate {
            Candidate::Native(datetime) => Ok(Self::from_naive(datetime.time())),
            Candidate::Time(time) => Ok(time),
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
impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        codec::deserialize_text(deserializer, Self::LABEL, |text| text.parse())
    }
}
