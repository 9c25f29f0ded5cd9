// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Canonical instant and the comparison capability shared by every value kind.
//!
//! [`CanonicalInstant`] is the single totally ordered representation every
//! [`Date`](crate::Date), [`Time`](crate::Time) and
//! [`DateTime`](crate::DateTime) normalises to: whole seconds elapsed since
//! `0000-01-01T00:00:00` on the proleptic Gregorian axis. A time of day with
//! no date is placed on that epoch day.
//!
//! [`CalendarPoint`] is the capability trait. Its comparison methods are
//! provided once, generically, on top of
//! [`canonical_instant`](CalendarPoint::canonical_instant), so any two kinds
//! compare without per-type code.

use crate::error::DateTimeError;
use crate::range::Candidate;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use qtty::{Day, Days, Seconds};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const SECONDS_PER_DAY: i64 = 86_400;

/// chrono counts 0001-01-01 as day 1; year 0 is a leap year.
const EPOCH_DAYS_FROM_CE: i32 = -365;

/// Julian Day of the canonical epoch `0000-01-01T00:00:00`.
const EPOCH_JD: Days = Days::new(1_721_059.5);

// ═══════════════════════════════════════════════════════════════════════════
// CanonicalInstant
// ═══════════════════════════════════════════════════════════════════════════

/// Seconds since `0000-01-01T00:00:00`, the ordering key of every value kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalInstant {
    seconds: i64,
}

impl CanonicalInstant {
    /// `0000-01-01T00:00:00`.
    pub const EPOCH: Self = Self { seconds: 0 };

    /// Create from a raw second count relative to [`EPOCH`](Self::EPOCH).
    #[inline]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self { seconds }
    }

    /// Raw second count relative to [`EPOCH`](Self::EPOCH).
    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The second count as a typed quantity.
    #[inline]
    pub fn quantity(&self) -> Seconds {
        Seconds::new(self.seconds as f64)
    }

    /// Julian Day of this instant, taking the calendar fields as UT.
    #[inline]
    pub fn julian_day(&self) -> Days {
        EPOCH_JD + self.quantity().to::<Day>()
    }

    /// Normalise a naive chrono date-time.
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        let days = i64::from(datetime.date().num_days_from_ce() - EPOCH_DAYS_FROM_CE);
        let seconds = i64::from(datetime.time().num_seconds_from_midnight());
        Self::from_seconds(days * SECONDS_PER_DAY + seconds)
    }

    /// Back to a naive chrono date-time, `None` outside chrono's range.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let days = i32::try_from(self.seconds.div_euclid(SECONDS_PER_DAY)).ok()?;
        let seconds = u32::try_from(self.seconds.rem_euclid(SECONDS_PER_DAY)).ok()?;
        let date = NaiveDate::from_num_days_from_ce_opt(days.checked_add(EPOCH_DAYS_FROM_CE)?)?;
        let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;
        Some(date.and_time(time))
    }
}

impl From<NaiveDateTime> for CanonicalInstant {
    #[inline]
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_naive(datetime)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarPoint trait
// ═══════════════════════════════════════════════════════════════════════════

/// A validated, immutable calendar or clock point.
///
/// Implemented by [`Date`](crate::Date), [`Time`](crate::Time) and
/// [`DateTime`](crate::DateTime). The canonical text form is provided by
/// `Display`/`FromStr`, and every comparison is made on
/// [`canonical_instant`](Self::canonical_instant), so mixed kinds compare
/// consistently.
pub trait CalendarPoint:
    Copy + fmt::Debug + fmt::Display + PartialEq + FromStr<Err = DateTimeError> + 'static
{
    /// Label used in error messages (`"date"`, `"time"`, `"date time"`).
    const LABEL: &'static str;

    /// Label used in error messages about ranges of this kind.
    const RANGE_LABEL: &'static str;

    /// The comparable representation of this point.
    fn canonical_instant(&self) -> CanonicalInstant;

    /// Converts a range membership candidate to this kind.
    fn from_candidate(candidate: Candidate<'_>) -> Result<Self, DateTimeError>;

    /// Total order on canonical instants.
    ///
    /// `Ordering::Less as i8` is `-1`, `Ordering::Greater as i8` is `+1`.
    #[inline]
    fn compare<P: CalendarPoint>(&self, other: &P) -> Ordering {
        self.canonical_instant().cmp(&other.canonical_instant())
    }

    /// Same canonical instant.
    #[inline]
    fn equal<P: CalendarPoint>(&self, other: &P) -> bool {
        self.canonical_instant() == other.canonical_instant()
    }

    /// Strictly earlier than `other`.
    #[inline]
    fn before<P: CalendarPoint>(&self, other: &P) -> bool {
        self.canonical_instant() < other.canonical_instant()
    }

    /// Strictly later than `other`.
    #[inline]
    fn after<P: CalendarPoint>(&self, other: &P) -> bool {
        self.canonical_instant() > other.canonical_instant()
    }

    /// Strictly after `start` and strictly before `end`.
    ///
    /// Neither endpoint is ever a member.
    #[inline]
    fn between<A: CalendarPoint, B: CalendarPoint>(&self, start: &A, end: &B) -> bool {
        self.after(start) && self.before(end)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
