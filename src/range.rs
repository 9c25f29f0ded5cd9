// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bracketed ranges over one kind of calendar point.
//!
//! This module provides:
//! - [`Boundary`]: inclusive (`[`, `]`) or exclusive (`(`, `)`) endpoint
//! - [`Range<P>`]: interval over any [`CalendarPoint`], either side unbounded
//! - [`Candidate`]: the closed set of inputs accepted by membership tests
//!
//! A range is rendered as `<open><from>, <to><close>`; an unbounded side is
//! left blank (`[, 2026-01-31]`). Parsing accepts any whitespace around the
//! comma, rendering always writes `", "`, so `parse(render(r)) == r`.

use crate::codec::{self, RANGE_SEPARATOR};
use crate::error::DateTimeError;
use crate::instant::CalendarPoint;
use crate::value::Value;
use crate::{Date, DateTime, Time};
use chrono::{NaiveDateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// Boundary
// ═══════════════════════════════════════════════════════════════════════════

/// Whether a range endpoint is itself a member of the range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// `[` or `]`: the endpoint is a member.
    Inclusive,
    /// `(` or `)`: the endpoint is not a member.
    Exclusive,
}

impl Boundary {
    /// `[` or `(`.
    #[inline]
    pub const fn opening_bracket(self) -> char {
        match self {
            Self::Inclusive => '[',
            Self::Exclusive => '(',
        }
    }

    /// `]` or `)`.
    #[inline]
    pub const fn closing_bracket(self) -> char {
        match self {
            Self::Inclusive => ']',
            Self::Exclusive => ')',
        }
    }

    /// Boundary written by an opening bracket, `None` for any other character.
    #[inline]
    pub const fn from_opening_bracket(bracket: char) -> Option<Self> {
        match bracket {
            '[' => Some(Self::Inclusive),
            '(' => Some(Self::Exclusive),
            _ => None,
        }
    }

    /// Boundary written by a closing bracket, `None` for any other character.
    #[inline]
    pub const fn from_closing_bracket(bracket: char) -> Option<Self> {
        match bracket {
            ']' => Some(Self::Inclusive),
            ')' => Some(Self::Exclusive),
            _ => None,
        }
    }

    /// Whether a candidate ordered `ordering` against an endpoint lies on
    /// the `inside` side of it, the endpoint itself counting only when inclusive.
    #[inline]
    fn admits(self, ordering: Ordering, inside: Ordering) -> bool {
        ordering == inside || (ordering == Ordering::Equal && self == Self::Inclusive)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Candidate
// ═══════════════════════════════════════════════════════════════════════════

/// An input to [`Range::contains`].
///
/// Every variant is converted to the range's kind first. Native chrono
/// values are projected onto that kind (a `Range<Date>` looks at the date
/// part); typed values must already be of that kind; text must parse as it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// A chrono date-time, projected onto the range kind.
    Native(NaiveDateTime),
    /// A date, accepted by date ranges only.
    Date(Date),
    /// A time of day, accepted by time ranges only.
    Time(Time),
    /// A date and time, accepted by date time ranges only.
    DateTime(DateTime),
    /// Text parsed as the range kind.
    Text(&'a str),
}

impl Candidate<'_> {
    /// Kind name used when the candidate is rejected.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Native(_) => "native date time",
            Self::Date(_) => <Date as CalendarPoint>::LABEL,
            Self::Time(_) => <Time as CalendarPoint>::LABEL,
            Self::DateTime(_) => <DateTime as CalendarPoint>::LABEL,
            Self::Text(_) => "text",
        }
    }
}

impl From<NaiveDateTime> for Candidate<'_> {
    fn from(value: NaiveDateTime) -> Self {
        Self::Native(value)
    }
}

impl From<chrono::DateTime<Utc>> for Candidate<'_> {
    fn from(value: chrono::DateTime<Utc>) -> Self {
        Self::Native(value.naive_utc())
    }
}

impl From<Date> for Candidate<'_> {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<Time> for Candidate<'_> {
    fn from(value: Time) -> Self {
        Self::Time(value)
    }
}

impl From<DateTime> for Candidate<'_> {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Range
// ═══════════════════════════════════════════════════════════════════════════

/// An interval over points of kind `P` with per-side inclusivity.
///
/// At least one side is bounded. An unbounded side never restricts
/// membership.
///
/// # Examples
///
/// ```
/// use tempora::{Date, DateRange};
///
/// let year: DateRange = "[2025-01-31, 2026-01-31]".parse()?;
///
/// assert!(year.contains("2025-05-06"));
/// assert!(year.contains("2026-01-31"));
/// assert!(!year.contains("2026-02-01"));
/// assert!(!year.contains("not a date"));
/// assert_eq!(year.to_string(), "[2025-01-31, 2026-01-31]");
///
/// let after: DateRange = DateRange::open("2025-01-31", "")?;
/// assert!(after.contains(Date::new(2030, 1, 1)?));
/// # Ok::<(), tempora::DateTimeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<P: CalendarPoint> {
    from: Value<P>,
    to: Value<P>,
    start: Boundary,
    end: Boundary,
}

/// Range of [`Date`]s.
pub type DateRange = Range<Date>;

/// Range of [`Time`]s.
pub type TimeRange = Range<Time>;

/// Range of [`DateTime`]s.
pub type DateTimeRange = Range<DateTime>;

impl<P: CalendarPoint> Range<P> {
    /// Creates a range from endpoint text; empty text leaves that side unbounded.
    ///
    /// Each bounded side is validated as a `P` and its error is returned
    /// as is. Fails with [`DateTimeError::EmptyRange`] when both sides are
    /// empty.
    pub fn new(from: &str, to: &str, start: Boundary, end: Boundary) -> Result<Self, DateTimeError> {
        let from = Value::parse_endpoint(from)?;
        let to = Value::parse_endpoint(to)?;
        Self::from_values(from, to, start, end)
    }

    /// Creates a range from already validated values.
    pub fn from_values(
        from: Value<P>,
        to: Value<P>,
        start: Boundary,
        end: Boundary,
    ) -> Result<Self, DateTimeError> {
        if from.is_unbounded() && to.is_unbounded() {
            return Err(DateTimeError::EmptyRange);
        }
        Ok(Self {
            from,
            to,
            start,
            end,
        })
    }

    /// Creates a range from typed endpoints; `None` leaves that side unbounded.
    pub fn from_points(
        from: Option<P>,
        to: Option<P>,
        start: Boundary,
        end: Boundary,
    ) -> Result<Self, DateTimeError> {
        Self::from_values(
            from.map_or_else(Value::unbounded, Value::from_point),
            to.map_or_else(Value::unbounded, Value::from_point),
            start,
            end,
        )
    }

    /// `[from, to]`
    pub fn closed(from: &str, to: &str) -> Result<Self, DateTimeError> {
        Self::new(from, to, Boundary::Inclusive, Boundary::Inclusive)
    }

    /// `(from, to)`
    pub fn open(from: &str, to: &str) -> Result<Self, DateTimeError> {
        Self::new(from, to, Boundary::Exclusive, Boundary::Exclusive)
    }

    /// `[from, to)`
    pub fn closed_open(from: &str, to: &str) -> Result<Self, DateTimeError> {
        Self::new(from, to, Boundary::Inclusive, Boundary::Exclusive)
    }

    /// `(from, to]`
    pub fn open_closed(from: &str, to: &str) -> Result<Self, DateTimeError> {
        Self::new(from, to, Boundary::Exclusive, Boundary::Inclusive)
    }

    /// Lower endpoint value, empty when unbounded.
    #[inline]
    pub fn from(&self) -> &Value<P> {
        &self.from
    }

    /// Upper endpoint value, empty when unbounded.
    #[inline]
    pub fn to(&self) -> &Value<P> {
        &self.to
    }

    /// Inclusivity of the lower endpoint.
    #[inline]
    pub fn start(&self) -> Boundary {
        self.start
    }

    /// Inclusivity of the upper endpoint.
    #[inline]
    pub fn end(&self) -> Boundary {
        self.end
    }

    /// Lower endpoint, `None` when unbounded.
    #[inline]
    pub fn lower(&self) -> Option<P> {
        self.from.point()
    }

    /// Upper endpoint, `None` when unbounded.
    #[inline]
    pub fn upper(&self) -> Option<P> {
        self.to.point()
    }

    /// Membership of an already typed point, honouring both boundaries.
    pub fn contains_point(&self, point: &P) -> bool {
        let above = self
            .lower()
            .is_none_or(|lower| self.start.admits(point.compare(&lower), Ordering::Greater));
        let below = self
            .upper()
            .is_none_or(|upper| self.end.admits(point.compare(&upper), Ordering::Less));
        above && below
    }

    /// Membership test that reports why a candidate could not be compared.
    pub fn try_contains<'a, C>(&self, candidate: C) -> Result<bool, DateTimeError>
    where
        C: Into<Candidate<'a>>,
    {
        P::from_candidate(candidate.into()).map(|point| self.contains_point(&point))
    }

    /// Membership test that fails closed.
    ///
    /// A candidate that cannot be converted to `P` (wrong kind, text that
    /// does not parse) is simply not a member.
    pub fn contains<'a, C>(&self, candidate: C) -> bool
    where
        C: Into<Candidate<'a>>,
    {
        match self.try_contains(candidate) {
            Ok(member) => member,
            Err(error) => {
                debug!(range = %self, %error, "membership candidate rejected");
                false
            }
        }
    }
}

impl<P: CalendarPoint> fmt::Display for Range<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.start.opening_bracket(),
            self.from,
            RANGE_SEPARATOR,
            self.to,
            self.end.closing_bracket()
        )
    }
}

impl<P: CalendarPoint> FromStr for Range<P> {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        trace!(text = s, "parsing range");
        let parts = codec::split_range(s, P::RANGE_LABEL)?;
        let unsupported = || DateTimeError::unsupported_format(P::RANGE_LABEL, s);
        let start = Boundary::from_opening_bracket(parts.open).ok_or_else(unsupported)?;
        let end = Boundary::from_closing_bracket(parts.close).ok_or_else(unsupported)?;
        Self::new(parts.from, parts.to, start, end)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<P: CalendarPoint> Serialize for Range<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, P: CalendarPoint> Deserialize<'de> for Range<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        codec::deserialize_text(deserializer, P::RANGE_LABEL, |text| text.parse())
    }
}
