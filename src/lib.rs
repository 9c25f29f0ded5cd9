// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar Module
//!
//! Validated Gregorian date/time values, their canonical text forms,
//! bracketed ranges over them, and the date of Easter.
//!
//! # Core types
//!
//! - [`Date`]: calendar date, `YYYY-MM-DD`.
//! - [`Time`]: time of day with whole seconds, `HH:MM:SS`.
//! - [`DateTime`]: both, `YYYY-MM-DD HH:MM:SS`.
//! - [`CalendarPoint`]: trait shared by the three kinds: canonical instant,
//!   `compare`, `before`, `after`, strictly exclusive `between`.
//! - [`CanonicalInstant`]: seconds since `0000-01-01 00:00:00`, the common
//!   ordering of every kind.
//! - [`Value<P>`]: canonical text of one kind, or empty for "unbounded".
//! - [`Range<P>`]: interval with `[`/`(` and `]`/`)` boundaries.
//!
//! # Text forms
//!
//! | Kind | Canonical text |
//! |------|----------------|
//! | [`Date`] | `2024-12-25` |
//! | [`Time`] | `08:05:09` |
//! | [`DateTime`] | `2024-12-25 08:05:09` |
//! | [`DateRange`] | `[2025-01-31, 2026-01-31)` |
//!
//! Text that does not have the shape of the kind fails with
//! [`DateTimeError::UnsupportedFormat`]; text with the right shape but an
//! impossible field (`2025-02-31`) fails with that field's validation error.
//!
//! # Easter
//!
//! [`easter::easter_sunday`], [`easter::good_friday`] and
//! [`easter::easter_monday`] compute the Gregorian feasts for a year.
//!
//! ```
//! use tempora::{easter, DateRange};
//!
//! let lent_to_pentecost: DateRange = "[2024-02-14, 2024-05-19]".parse()?;
//! assert!(lent_to_pentecost.contains(easter::easter_sunday(2024)?));
//! # Ok::<(), tempora::DateTimeError>(())
//! ```

mod calendar;
pub mod codec;
mod date;
mod datetime;
pub mod easter;
mod error;
mod instant;
mod range;
mod time;
mod value;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{days_in_month, days_in_month_list, is_leap_year, normalized_date};
pub use date::{Date, MAX_YEAR};
pub use datetime::DateTime;
pub use error::DateTimeError;
pub use instant::{CalendarPoint, CanonicalInstant};
pub use range::{Boundary, Candidate, DateRange, DateTimeRange, Range, TimeRange};
pub use time::Time;
pub use value::{DateTimeValue, DateValue, TimeValue, Value};
