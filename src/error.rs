// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every constructor and parser in the crate.

/// Error returned when a calendar value, a value wrapper, or a range cannot be built.
///
/// Validation is fail-fast: the first field that is out of range is the one
/// reported, later fields are never inspected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// The year is negative or does not fit the four-digit canonical form.
    #[error("year must be between 0-9999, got {year}")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// The month is outside `1..=12`.
    #[error("month must be between 1-12, got {month}")]
    InvalidMonth {
        /// The rejected month.
        month: u32,
    },

    /// The day exceeds the length of the month in that year.
    #[error("day must be between 1-{max} for month {month} of year {year}, got {day}")]
    InvalidDay {
        /// Year the day was checked against.
        year: i32,
        /// Month the day was checked against.
        month: u32,
        /// The rejected day.
        day: u32,
        /// Number of days in that month.
        max: u32,
    },

    /// The hour is outside `0..=23`.
    #[error("hour must be between 0-23, got {hour}")]
    InvalidHour {
        /// The rejected hour.
        hour: u32,
    },

    /// The minute is outside `0..=59`.
    #[error("minute must be between 0-59, got {minute}")]
    InvalidMinute {
        /// The rejected minute.
        minute: u32,
    },

    /// The second is outside `0..=59`.
    #[error("second must be between 0-59, got {second}")]
    InvalidSecond {
        /// The rejected second.
        second: u32,
    },

    /// The text does not match the canonical pattern of `kind`.
    #[error("unsupported format of {kind} \"{text}\"")]
    UnsupportedFormat {
        /// Human label of the expected format (`"date"`, `"time range"`, ...).
        kind: &'static str,
        /// The rejected text.
        text: String,
    },

    /// Both endpoints of a range are unbounded.
    #[error("range endpoints can not both be empty")]
    EmptyRange,

    /// A membership candidate is of a kind the range cannot compare against.
    #[error("unsupported input kind: expected {expected}, got {found}")]
    UnsupportedInputKind {
        /// Kind the range holds.
        expected: &'static str,
        /// Kind that was offered.
        found: &'static str,
    },
}

impl DateTimeError {
    pub(crate) fn unsupported_format(kind: &'static str, text: &str) -> Self {
        Self::UnsupportedFormat {
            kind,
            text: text.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_year() {
        let e = DateTimeError::InvalidYear { year: -2024 };
        assert_eq!(e.to_string(), "year must be between 0-9999, got -2024");
    }

    #[test]
    fn error_invalid_day_reports_month_length() {
        let e = DateTimeError::InvalidDay {
            year: 2024,
            month: 2,
            day: 30,
            max: 29,
        };
        assert_eq!(
            e.to_string(),
            "day must be between 1-29 for month 2 of year 2024, got 30"
        );
    }

    #[test]
    fn error_unsupported_format() {
        let e = DateTimeError::unsupported_format("date", "invalid");
        assert_eq!(e.to_string(), "unsupported format of date \"invalid\"");
    }

    #[test]
    fn error_unsupported_input_kind() {
        let e = DateTimeError::UnsupportedInputKind {
            expected: "date",
            found: "time",
        };
        assert_eq!(e.to_string(), "unsupported input kind: expected date, got time");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DateTimeError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DateTimeError>();
    }
}
