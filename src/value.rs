// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! String-backed typed wrapper around one kind of calendar point.

#[cfg(feature = "serde")]
use crate::codec;
use crate::error::DateTimeError;
use crate::instant::CalendarPoint;
use crate::{Date, DateTime, Time};
use std::fmt;
use std::marker::PhantomData;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical text of a validated point of kind `P`, or empty for "unbounded".
///
/// A non-empty `Value` always holds text that parses back to a `P`: it is
/// only built from a point or from text that passed validation, and in the
/// latter case the text is re-emitted in canonical form.
///
/// # Examples
///
/// ```
/// use tempora::{Date, DateValue};
///
/// let value = DateValue::parse("2025-02-02")?;
/// assert_eq!(value.as_str(), "2025-02-02");
/// assert_eq!(value.point(), Some(Date::new(2025, 2, 2)?));
///
/// assert!(DateValue::parse("2025-02-31").is_err());
/// assert_eq!(DateValue::unbounded().point(), None);
/// # Ok::<(), tempora::DateTimeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Value<P> {
    text: String,
    _kind: PhantomData<P>,
}

/// Text value of a [`Date`].
pub type DateValue = Value<Date>;

/// Text value of a [`Time`].
pub type TimeValue = Value<Time>;

/// Text value of a [`DateTime`].
pub type DateTimeValue = Value<DateTime>;

impl<P: CalendarPoint> Value<P> {
    /// The empty value, an unbounded range endpoint.
    #[inline]
    pub const fn unbounded() -> Self {
        Self {
            text: String::new(),
            _kind: PhantomData,
        }
    }

    /// Canonical text of `point`.
    pub fn from_point(point: P) -> Self {
        Self {
            text: point.to_string(),
            _kind: PhantomData,
        }
    }

    /// Validate `text` as a `P` and keep its canonical rendering.
    ///
    /// Empty text is not a point and is rejected; use
    /// [`unbounded`](Self::unbounded) for that.
    pub fn parse(text: &str) -> Result<Self, DateTimeError> {
        text.parse::<P>().map(Self::from_point)
    }

    /// Like [`parse`](Self::parse), but empty text yields [`unbounded`](Self::unbounded).
    pub fn parse_endpoint(text: &str) -> Result<Self, DateTimeError> {
        if text.is_empty() {
            Ok(Self::unbounded())
        } else {
            Self::parse(text)
        }
    }

    /// Whether this is the empty, unbounded value.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.text.is_empty()
    }

    /// The canonical text, empty when unbounded.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The point this value denotes; `None` when unbounded.
    ///
    /// Never fails loudly: text that does not parse yields `None`.
    pub fn point(&self) -> Option<P> {
        if self.is_unbounded() {
            return None;
        }
        self.text.parse().ok()
    }
}

impl<P: CalendarPoint> Default for Value<P> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<P: CalendarPoint> From<P> for Value<P> {
    fn from(point: P) -> Self {
        Self::from_point(point)
    }
}

impl<P> fmt::Display for Value<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<P: CalendarPoint> Serialize for Value<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
impl<'de, P: CalendarPoint> Deserialize<'de> for Value<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        codec::deserialize_text(deserializer, P::LABEL, Self::parse_endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_value_holds_canonical_text() {
        let value = DateValue::parse("2025-02-02").unwrap();
        assert_eq!(value.to_string(), "2025-02-02");
        assert_eq!(value.point(), "2025-02-02".parse().ok());
        assert!(!value.is_unbounded());
    }

    #[test]
    fn invalid_text_is_rejected_and_never_yields_a_point() {
        assert!(matches!(
            DateValue::parse("2025-02-31"),
            Err(DateTimeError::InvalidDay { .. })
        ));
        assert!(matches!(
            TimeValue::parse("18:60:05"),
            Err(DateTimeError::InvalidMinute { .. })
        ));
        assert!(matches!(
            DateTimeValue::parse("2025-02-31 18:30:05"),
            Err(DateTimeError::InvalidDay { .. })
        ));
        assert!(matches!(
            DateValue::parse(""),
            Err(DateTimeError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn time_and_date_time_values() {
        let time = TimeValue::parse("18:30:05").unwrap();
        assert_eq!(time.point(), Time::new(18, 30, 5).ok());

        let dt = DateTimeValue::parse("2025-02-02 18:30:05").unwrap();
        assert_eq!(dt.point(), DateTime::new(2025, 2, 2, 18, 30, 5).ok());
    }

    #[test]
    fn unbounded_value() {
        let value = DateValue::unbounded();
        assert!(value.is_unbounded());
        assert_eq!(value.as_str(), "");
        assert_eq!(value.point(), None);
        assert_eq!(DateValue::default(), value);
        assert_eq!(DateValue::parse_endpoint("").unwrap(), value);
    }

    #[test]
    fn from_point_matches_display() {
        let date = Date::new(2024, 2, 29).unwrap();
        let value: DateValue = date.into();
        assert_eq!(value.as_str(), "2024-02-29");
        assert_eq!(value.point(), Some(date));
    }
}
