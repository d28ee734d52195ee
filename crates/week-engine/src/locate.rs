//! Locating weeks by year: week 1, all weeks of a week-year, and the weeks
//! that straddle New Year.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use crate::convention::WeekConvention;
use crate::date::{day_start, CalendarDate};
use crate::error::{Result, WeekError};
use crate::numbering::{week_info, week_number, WeekInfo, WeekKey};
use crate::range::{weeks_between, Weeks};

/// Jan 1 of `year`, provided the neighbouring years are representable too.
fn new_year(year: i32) -> Result<NaiveDate> {
    let neighbours_exist = year
        .checked_sub(1)
        .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
        .zip(year.checked_add(1).and_then(|y| NaiveDate::from_ymd_opt(y, 12, 31)))
        .is_some();
    NaiveDate::from_ymd_opt(year, 1, 1)
        .filter(|_| neighbours_exist)
        .ok_or(WeekError::InvalidYear(year))
}

/// Day-start of week 1 of `year`.
///
/// Walks forward from Jan 1 to the first `convention.first_day()`, then steps
/// back a week at a time until the candidate is numbered 1. Under a
/// non-Monday convention the result can be reported under the previous
/// week-year (see [`crate::numbering`]).
///
/// # Errors
///
/// Returns [`WeekError::InvalidYear`] if `year` (or a neighbour) is outside
/// the supported calendar range.
///
/// # Examples
///
/// ```
/// use week_engine::{first_week_start, WeekConvention};
///
/// // Jan 1 2026 is a Thursday, so ISO week 1 starts Monday Dec 29 2025
/// let start = first_week_start(2026, WeekConvention::MONDAY).unwrap();
/// assert_eq!(start.date().to_string(), "2025-12-29");
/// ```
pub fn first_week_start(year: i32, convention: WeekConvention) -> Result<CalendarDate> {
    let mut candidate = day_start(new_year(year)?);
    while candidate.weekday() != convention.first_day() {
        candidate += Duration::days(1);
    }

    while week_number(candidate, convention) != 1 {
        debug!(
            year,
            candidate = %candidate.date(),
            "first weekday of the year is not in week 1, stepping back a week"
        );
        candidate -= Duration::days(7);
    }
    Ok(candidate)
}

/// Every week numbered in `year`'s cycle, week 1 first.
///
/// Yields 52 or 53 weeks numbered consecutively from 1. Weeks inside the
/// calendar year have `key.week_year == year`; the first and last week may
/// be reported under a neighbouring year instead.
pub fn weeks_of_year(year: i32, convention: WeekConvention) -> Result<Weeks> {
    let first = first_week_start(year, convention)?;
    let following = year.checked_add(1).ok_or(WeekError::InvalidYear(year))?;
    let next_first = first_week_start(following, convention)?;
    Ok(weeks_between(first, next_first - Duration::days(7), convention))
}

/// The week identified by `key`.
///
/// # Errors
///
/// [`WeekError::InvalidWeekKey`] if no week carries `key` (week 53 of a
/// 52-week year), [`WeekError::InvalidYear`] if the year is out of range.
///
/// A key naming two weeks resolves to the earlier one.
pub fn week_for_key(key: WeekKey, convention: WeekConvention) -> Result<WeekInfo> {
    let offset = Duration::weeks(i64::from(key.week) - 1);
    let own = first_week_start(key.week_year, convention)?;
    // a New Year week can be numbered in a neighbouring year's cycle
    let neighbours = [key.week_year.checked_sub(1), key.week_year.checked_add(1)]
        .into_iter()
        .flatten()
        .filter_map(|year| first_week_start(year, convention).ok());

    std::iter::once(own)
        .chain(neighbours)
        .map(|first| week_info(first + offset, convention))
        .filter(|info| info.key == key)
        .min_by_key(|info| info.start)
        .ok_or_else(|| {
            WeekError::InvalidWeekKey(format!(
                "{key} does not exist when weeks start on {convention}"
            ))
        })
}

/// Weeks whose days fall in two calendar years, for New Years
/// `start_year..=end_year` (either order), earliest first.
///
/// For each year the week holding Dec 31 and the week holding Jan 1 are
/// considered; the week around one New Year is reported once.
pub fn cross_year_weeks(
    start_year: i32,
    end_year: i32,
    convention: WeekConvention,
) -> Result<Vec<WeekInfo>> {
    let (from, to) = if start_year <= end_year {
        (start_year, end_year)
    } else {
        (end_year, start_year)
    };

    let mut weeks = Vec::new();
    for year in from..=to {
        let jan1 = new_year(year)?;
        let dec31 = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(WeekError::InvalidYear(year))?;
        for day in [jan1, dec31] {
            let info = week_info(day_start(day), convention);
            if info.spans_year_boundary() {
                weeks.push(info);
            }
        }
    }
    weeks.sort_by_key(|w| w.start);
    weeks.dedup_by_key(|w| w.start);
    Ok(weeks)
}
