//! Week numbers and week-years.
//!
//! A week is identified by a [`WeekKey`]: the week-year it is reported under
//! and its number within that year. Both are derived from the week's start
//! day alone, so the seven days of one week always share one key even when
//! they straddle New Year.
//!
//! Monday-first weeks take their ISO 8601 number. Any other week is first
//! re-expressed in Monday-first terms: its middle day picks the Monday-first
//! week it overlaps most, and that week's ISO number is used.
//!
//! The week-year is the calendar year holding at least four of the week's
//! days. For non-Monday conventions the two can disagree at New Year: the
//! Sunday-first week 2025-12-28 .. 2026-01-03 is reported as `2025-W01`, and
//! Sunday-first week-year 2026 then begins at week 2. Keys are still shared
//! by all seven days of a week, but a key may name two weeks a year apart.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use tracing::trace;

use crate::boundary::{week_end, week_start};
use crate::convention::WeekConvention;
use crate::date::CalendarDate;
use crate::error::{Result, WeekError};

/// Offset from a week's first day to its middle day.
const MIDPOINT_OFFSET_DAYS: i64 = 3;

/// Days a year needs within a week to own it.
const MAJORITY_DAYS: u8 = 4;

// ── WeekKey ─────────────────────────────────────────────────────────────────

/// `(week_year, week)` identifying one week under a given convention.
///
/// Orders by week-year, then week, and renders as `2024-W52`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WeekKey {
    pub week_year: i32,
    /// 1..=53
    pub week: u32,
}

impl WeekKey {
    pub fn new(week_year: i32, week: u32) -> Result<Self> {
        if !(1..=53).contains(&week) {
            return Err(WeekError::InvalidWeekKey(format!(
                "week {week} is outside 1..=53"
            )));
        }
        Ok(Self { week_year, week })
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.week_year, self.week)
    }
}

impl FromStr for WeekKey {
    type Err = WeekError;

    /// Parses `2024-W52`, `2024W52` or `2024-w5`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || WeekError::InvalidWeekKey(s.to_string());
        let trimmed = s.trim();
        let split = trimmed.rfind(['W', 'w']).ok_or_else(invalid)?;
        let year_part = trimmed[..split].strip_suffix('-').unwrap_or(&trimmed[..split]);
        let week_part = &trimmed[split + 1..];

        let week_year = year_part.parse::<i32>().map_err(|_| invalid())?;
        let week = week_part.parse::<u32>().map_err(|_| invalid())?;
        Self::new(week_year, week)
    }
}

// ── week_number ─────────────────────────────────────────────────────────────

/// Week number (1..=53) of the week containing `week_start_date`.
///
/// Normally called with the result of [`week_start`], but any day of the
/// week gives the same answer.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use week_engine::{week_number, WeekConvention};
///
/// let monday = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(week_number(monday, WeekConvention::MONDAY), 52);
/// ```
pub fn week_number(week_start_date: CalendarDate, convention: WeekConvention) -> u32 {
    let start = week_start(week_start_date, convention).date();
    if convention == WeekConvention::MONDAY {
        return start.iso_week().week();
    }
    monday_week_of_middle(start).iso_week().week()
}

/// Start of the Monday-first week holding the middle day of the week that
/// starts on `start`.
fn monday_week_of_middle(start: NaiveDate) -> NaiveDate {
    let middle = start + Duration::days(MIDPOINT_OFFSET_DAYS);
    middle - Duration::days(i64::from(middle.weekday().num_days_from_monday()))
}

// ── week_year ───────────────────────────────────────────────────────────────

/// Days per calendar year across seven consecutive days.
///
/// Seven consecutive days touch at most two years, so two ordered slots
/// suffice and iteration order is by year, not by insertion.
#[derive(Debug, Default)]
struct YearTally {
    entries: [(i32, u8); 2],
    len: usize,
}

impl YearTally {
    fn of_week(first_day: NaiveDate) -> Self {
        let mut tally = Self::default();
        for day in first_day.iter_days().take(7) {
            tally.record(day.year());
        }
        tally
    }

    fn record(&mut self, year: i32) {
        if let Some(entry) = self.entries[..self.len].iter_mut().find(|(y, _)| *y == year) {
            entry.1 += 1;
            return;
        }
        debug_assert!(self.len < self.entries.len(), "a week spans at most two years");
        // days arrive in ascending order, so appending keeps entries sorted
        self.entries[self.len] = (year, 1);
        self.len += 1;
    }

    fn count(&self, year: i32) -> u8 {
        self.entries[..self.len]
            .iter()
            .find(|(y, _)| *y == year)
            .map_or(0, |(_, n)| *n)
    }

    /// Year with the most days; ties go to the later year.
    fn majority(&self) -> Option<i32> {
        self.entries[..self.len]
            .iter()
            .fold(None, |best: Option<(i32, u8)>, &(year, n)| match best {
                Some((_, best_n)) if best_n > n => best,
                _ => Some((year, n)),
            })
            .map(|(year, _)| year)
    }
}

/// Calendar year the week starting at `week_start_date` is reported under.
///
/// The neighbours of `fallback_year` are checked first, since the
/// interesting weeks are the ones around New Year of the caller's year;
/// otherwise the year holding most of the week wins.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use week_engine::week_year;
///
/// // Mon 2022-12-26 .. Sun 2023-01-01: four days in 2022
/// let start = NaiveDate::from_ymd_opt(2022, 12, 26).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(week_year(start, 2023), 2022);
/// ```
pub fn week_year(week_start_date: CalendarDate, fallback_year: i32) -> i32 {
    let tally = YearTally::of_week(week_start_date.date());

    let next = fallback_year + 1;
    if tally.count(next) >= MAJORITY_DAYS {
        trace!(fallback_year, week_year = next, "week belongs to the following year");
        return next;
    }
    let prev = fallback_year - 1;
    if tally.count(prev) >= MAJORITY_DAYS {
        trace!(fallback_year, week_year = prev, "week belongs to the preceding year");
        return prev;
    }
    tally.majority().unwrap_or(fallback_year)
}

// ── week_key / week_info ────────────────────────────────────────────────────

/// The [`WeekKey`] of the week containing `date`.
pub fn week_key(date: CalendarDate, convention: WeekConvention) -> WeekKey {
    let start = week_start(date, convention);
    WeekKey {
        week_year: week_year(start, date.year()),
        week: week_number(start, convention),
    }
}

/// A resolved week: its key and both boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekInfo {
    pub key: WeekKey,
    /// Day-start of the first day.
    pub start: CalendarDate,
    /// Day-end of the last day.
    pub end: CalendarDate,
}

impl WeekInfo {
    /// The seven days of the week, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.date().iter_days().take(7)
    }

    /// Whether the week's days fall in two calendar years.
    pub fn spans_year_boundary(&self) -> bool {
        self.start.year() != self.end.year()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Resolve the week containing `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use week_engine::{week_info, WeekConvention};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let info = week_info(date, WeekConvention::MONDAY);
/// assert_eq!(info.key.to_string(), "2024-W01");
/// assert_eq!(info.start.date().to_string(), "2024-01-01");
/// assert_eq!(info.end.date().to_string(), "2024-01-07");
/// ```
pub fn week_info(date: CalendarDate, convention: WeekConvention) -> WeekInfo {
    WeekInfo {
        key: week_key(date, convention),
        start: week_start(date, convention),
        end: week_end(date, convention),
    }
}
