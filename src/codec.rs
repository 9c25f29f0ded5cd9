// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Canonical text codec.
//!
//! | Kind | Pattern |
//! |------|---------|
//! | [`Date`] | `YYYY-MM-DD` |
//! | [`Time`] | `HH:MM:SS` |
//! | [`DateTime`] | `YYYY-MM-DD HH:MM:SS` |
//! | [`Range`](crate::Range) | `<[|(><from>, <to><]|)>` |
//!
//! The patterns only check the *shape* of the text. Text with the right
//! shape but out-of-range fields (`2025-02-31`) is handed to the value
//! constructors, which report the precise validation error. Text with the
//! wrong shape fails with [`DateTimeError::UnsupportedFormat`].
//!
//! All patterns are compiled once per process on first use and never change.

use crate::date::Date;
use crate::datetime::DateTime;
use crate::error::DateTimeError;
use crate::instant::CalendarPoint;
use crate::time::Time;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use regex::{Captures, Regex};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Separator written between the two endpoints of a rendered range.
pub const RANGE_SEPARATOR: &str = ", ";

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("invalid date pattern"));

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}):(\d{2}):(\d{2})$").expect("invalid time pattern"));

static DATE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2}) (\d{2}):(\d{2}):(\d{2})$")
        .expect("invalid date time pattern")
});

/// Date with an optional trailing clock part.
static DATE_OPTIONAL_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})(?: (\d{2}):(\d{2}):(\d{2}))?$")
        .expect("invalid lenient date pattern")
});

/// Clock with an optional leading date part.
static TIME_OPTIONAL_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d{4})-(\d{2})-(\d{2}) )?(\d{2}):(\d{2}):(\d{2})$")
        .expect("invalid lenient time pattern")
});

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\[(])\s*([^,\[\]()]*?)\s*,\s*([^,\[\]()]*?)\s*([\])])$")
        .expect("invalid range pattern")
});

// ── parsing ───────────────────────────────────────────────────────────────

fn field<T: FromStr>(
    caps: &Captures<'_>,
    index: usize,
    kind: &'static str,
    text: &str,
) -> Result<T, DateTimeError> {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| DateTimeError::unsupported_format(kind, text))
}

fn captures<'t>(
    pattern: &Regex,
    kind: &'static str,
    text: &'t str,
) -> Result<Captures<'t>, DateTimeError> {
    pattern
        .captures(text)
        .ok_or_else(|| DateTimeError::unsupported_format(kind, text))
}

fn date_at(caps: &Captures<'_>, first: usize, text: &str) -> Result<Date, DateTimeError> {
    Date::new(
        field(caps, first, Date::LABEL, text)?,
        field(caps, first + 1, Date::LABEL, text)?,
        field(caps, first + 2, Date::LABEL, text)?,
    )
}

fn time_at(caps: &Captures<'_>, first: usize, text: &str) -> Result<Time, DateTimeError> {
    Time::new(
        field(caps, first, Time::LABEL, text)?,
        field(caps, first + 1, Time::LABEL, text)?,
        field(caps, first + 2, Time::LABEL, text)?,
    )
}

fn date_time_at(
    caps: &Captures<'_>,
    date: usize,
    time: usize,
    text: &str,
) -> Result<DateTime, DateTimeError> {
    DateTime::new(
        field(caps, date, DateTime::LABEL, text)?,
        field(caps, date + 1, DateTime::LABEL, text)?,
        field(caps, date + 2, DateTime::LABEL, text)?,
        field(caps, time, DateTime::LABEL, text)?,
        field(caps, time + 1, DateTime::LABEL, text)?,
        field(caps, time + 2, DateTime::LABEL, text)?,
    )
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(text: &str) -> Result<Date, DateTimeError> {
    let caps = captures(&DATE_PATTERN, Date::LABEL, text)?;
    date_at(&caps, 1, text)
}

/// Parse `HH:MM:SS`.
pub fn parse_time(text: &str) -> Result<Time, DateTimeError> {
    let caps = captures(&TIME_PATTERN, Time::LABEL, text)?;
    time_at(&caps, 1, text)
}

/// Parse `YYYY-MM-DD HH:MM:SS`.
pub fn parse_date_time(text: &str) -> Result<DateTime, DateTimeError> {
    let caps = captures(&DATE_TIME_PATTERN, DateTime::LABEL, text)?;
    date_time_at(&caps, 1, 4, text)
}

/// Parse `YYYY-MM-DD[ HH:MM:SS]` into a date.
///
/// A clock part, when present, must itself be valid; it is then dropped.
pub fn parse_date_lenient(text: &str) -> Result<Date, DateTimeError> {
    let caps = captures(&DATE_OPTIONAL_TIME_PATTERN, Date::LABEL, text)?;
    if caps.get(4).is_some() {
        Ok(date_time_at(&caps, 1, 4, text)?.date())
    } else {
        date_at(&caps, 1, text)
    }
}

/// Parse `[YYYY-MM-DD ]HH:MM:SS` into a time of day.
///
/// A date part, when present, must itself be valid; it is then dropped.
pub fn parse_time_lenient(text: &str) -> Result<Time, DateTimeError> {
    let caps = captures(&TIME_OPTIONAL_DATE_PATTERN, Time::LABEL, text)?;
    if caps.get(1).is_some() {
        Ok(date_time_at(&caps, 1, 4, text)?.time())
    } else {
        time_at(&caps, 4, text)
    }
}

/// Parse `YYYY-MM-DD[ HH:MM:SS]` into a date-time, midnight when the clock is absent.
pub fn parse_date_time_lenient(text: &str) -> Result<DateTime, DateTimeError> {
    let caps = captures(&DATE_OPTIONAL_TIME_PATTERN, DateTime::LABEL, text)?;
    if caps.get(4).is_some() {
        date_time_at(&caps, 1, 4, text)
    } else {
        Ok(date_at(&caps, 1, text)?.and_time(Time::MIDNIGHT))
    }
}

/// Structural pieces of a range literal, endpoints trimmed and possibly empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RangeParts<'t> {
    pub open: char,
    pub from: &'t str,
    pub to: &'t str,
    pub close: char,
}

/// Split `<open><from>?,<to>?<close>` without interpreting the endpoints.
pub(crate) fn split_range<'t>(
    text: &'t str,
    kind: &'static str,
) -> Result<RangeParts<'t>, DateTimeError> {
    let caps = captures(&RANGE_PATTERN, kind, text)?;
    let bracket = |index: usize| {
        caps.get(index)
            .and_then(|m| m.as_str().chars().next())
            .ok_or_else(|| DateTimeError::unsupported_format(kind, text))
    };
    let side = |index: usize| caps.get(index).map_or("", |m| m.as_str());
    Ok(RangeParts {
        open: bracket(1)?,
        from: side(2),
        to: side(3),
        close: bracket(4)?,
    })
}

// ── formatting ────────────────────────────────────────────────────────────

/// Write `YYYY-MM-DD`, zero padded.
pub(crate) fn write_date(f: &mut fmt::Formatter<'_>, date: NaiveDate) -> fmt::Result {
    write!(f, "{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Write `HH:MM:SS`, zero padded.
pub(crate) fn write_time(f: &mut fmt::Formatter<'_>, time: NaiveTime) -> fmt::Result {
    write!(
        f,
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

// ── serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
struct TextVisitor<T> {
    kind: &'static str,
    parse: fn(&str) -> Result<T, DateTimeError>,
}

#[cfg(feature = "serde")]
impl<T> serde::de::Visitor<'_> for TextVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "canonical {} text", self.kind)
    }

    fn visit_str<E: serde::de::Error>(self, text: &str) -> Result<T, E> {
        (self.parse)(text).map_err(E::custom)
    }
}

/// Deserialize a value of `kind` from its canonical text with `parse`.
#[cfg(feature = "serde")]
pub(crate) fn deserialize_text<'de, D, T>(
    deserializer: D,
    kind: &'static str,
    parse: fn(&str) -> Result<T, DateTimeError>,
) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_str(TextVisitor { kind, parse })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_parses_canonical_text() {
        let date = parse_date("2025-02-02").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 2, 2));
    }

    #[test]
    fn date_shape_mismatch_is_unsupported_format() {
        for text in ["invalid", "2025-2-02", "25-02-02", "2025-02-02 10:00:00", " 2025-02-02", ""] {
            assert!(
                matches!(
                    parse_date(text),
                    Err(DateTimeError::UnsupportedFormat { kind: "date", .. })
                ),
                "{text:?} should not match the date pattern"
            );
        }
    }

    #[test]
    fn date_out_of_range_fields_report_validation_error() {
        assert_eq!(
            parse_date("2025-13-32"),
            Err(DateTimeError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            parse_date("2025-02-31"),
            Err(DateTimeError::InvalidDay {
                year: 2025,
                month: 2,
                day: 31,
                max: 28
            })
        );
        assert_eq!(
            parse_date("2025-00-10"),
            Err(DateTimeError::InvalidMonth { month: 0 })
        );
    }

    #[test]
    fn time_parses_and_validates() {
        let time = parse_time("18:30:05").unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (18, 30, 5));
        assert_eq!(
            parse_time("18:60:05"),
            Err(DateTimeError::InvalidMinute { minute: 60 })
        );
        assert_eq!(parse_time("24:00:00"), Err(DateTimeError::InvalidHour { hour: 24 }));
        assert!(matches!(
            parse_time("18:30"),
            Err(DateTimeError::UnsupportedFormat { kind: "time", .. })
        ));
    }

    #[test]
    fn date_time_requires_both_parts() {
        let dt = parse_date_time("2025-02-02 18:30:05").unwrap();
        assert_eq!(dt.to_string(), "2025-02-02 18:30:05");
        assert!(matches!(
            parse_date_time("2025-02-02"),
            Err(DateTimeError::UnsupportedFormat { kind: "date time", .. })
        ));
        assert!(matches!(
            parse_date_time("2025-02-02T18:30:05"),
            Err(DateTimeError::UnsupportedFormat { .. })
        ));
        assert_eq!(
            parse_date_time("2025-02-31 18:30:05"),
            Err(DateTimeError::InvalidDay {
                year: 2025,
                month: 2,
                day: 31,
                max: 28
            })
        );
    }

    #[test]
    fn lenient_date_drops_valid_clock() {
        let date = parse_date_lenient("2025-02-02 18:30:05").unwrap();
        assert_eq!(date.to_string(), "2025-02-02");
        assert_eq!(parse_date_lenient("2025-02-02").unwrap(), date);
        assert_eq!(
            parse_date_lenient("2025-02-02 25:00:00"),
            Err(DateTimeError::InvalidHour { hour: 25 })
        );
    }

    #[test]
    fn lenient_time_drops_valid_date() {
        let time = parse_time_lenient("2025-02-02 18:30:05").unwrap();
        assert_eq!(time.to_string(), "18:30:05");
        assert_eq!(parse_time_lenient("18:30:05").unwrap(), time);
        assert!(matches!(
            parse_time_lenient("2025-02-30 18:30:05"),
            Err(DateTimeError::InvalidDay { .. })
        ));
    }

    #[test]
    fn lenient_date_time_defaults_to_midnight() {
        let dt = parse_date_time_lenient("2025-02-02").unwrap();
        assert_eq!(dt.to_string(), "2025-02-02 00:00:00");
        assert!(dt.equal(&parse_date("2025-02-02").unwrap()));
    }

    #[test]
    fn range_split_accepts_flexible_separator() {
        let parts = split_range("[2025-01-31, 2026-01-31]", "date range").unwrap();
        assert_eq!(
            parts,
            RangeParts {
                open: '[',
                from: "2025-01-31",
                to: "2026-01-31",
                close: ']'
            }
        );

        let tight = split_range("(2025-01-31,2026-01-31)", "date range").unwrap();
        assert_eq!((tight.from, tight.to), ("2025-01-31", "2026-01-31"));

        let spaced = split_range("[2025-01-31 14:15:16 ,  ]", "date time range").unwrap();
        assert_eq!((spaced.from, spaced.to), ("2025-01-31 14:15:16", ""));
    }

    #[test]
    fn range_split_rejects_structural_mismatch() {
        for text in ["2025-01-31, 2026-01-31", "{2025-01-31, 2026-01-31}", "[2025-01-31]", "[a, b, c]"] {
            assert!(
                matches!(
                    split_range(text, "date range"),
                    Err(DateTimeError::UnsupportedFormat { kind: "date range", .. })
                ),
                "{text:?} should not split"
            );
        }
    }
}
