//! # week-engine
//!
//! Week arithmetic under a configurable first day of the week.
//!
//! Given a date and a [`WeekConvention`] (which weekday starts a week) the
//! engine finds the boundaries of the date's week, numbers the week the way
//! ISO 8601 does, decides which year the week belongs to when it straddles
//! New Year, widens picked ranges to whole weeks and renders week-qualified
//! labels such as `2024-W52`.
//!
//! Every function is pure: inputs are plain `Copy` values and results are new
//! values, so callers on any thread can share nothing and need no locking.
//!
//! ## Modules
//!
//! - [`convention`] — First-day-of-week setting
//! - [`date`] — Wall-clock dates, day-start/day-end, intervals, parsing
//! - [`boundary`] — First and last day of a date's week
//! - [`numbering`] — Week numbers, week-years and week keys
//! - [`range`] — Aligning ranges to whole weeks, walking weeks
//! - [`format`] — Week-qualified templates
//! - [`locate`] — Week 1 of a year, weeks of a year, cross-year weeks
//! - [`error`] — Error types

pub mod boundary;
pub mod convention;
pub mod date;
pub mod error;
pub mod format;
pub mod locate;
pub mod numbering;
pub mod range;

pub use boundary::{week_end, week_start};
pub use convention::WeekConvention;
pub use date::{day_end, day_start, parse_calendar_date, CalendarDate, DateInterval};
pub use error::WeekError;
pub use format::{format_week_range, format_week_range_str, FormatOptions, Template, WeekFormatter};
pub use locate::{cross_year_weeks, first_week_start, week_for_key, weeks_of_year};
pub use numbering::{week_info, week_key, week_number, week_year, WeekInfo, WeekKey};
pub use range::{align_to_weeks, weeks_between, Weeks};
