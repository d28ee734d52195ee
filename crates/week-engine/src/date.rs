//! Wall-clock calendar dates and date intervals.
//!
//! A [`CalendarDate`] is a local date with time of day and no time zone. It is
//! `Copy`, so every operation hands back an independent value.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WeekError};

/// A Gregorian date with wall-clock time of day, local zone implied.
pub type CalendarDate = NaiveDateTime;

/// 23:59:59.999 as milliseconds from midnight.
const LAST_MILLISECOND_OF_DAY: i64 = 86_399_999;

/// 00:00:00.000 on `date`.
pub fn day_start(date: NaiveDate) -> CalendarDate {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on `date`.
pub fn day_end(date: NaiveDate) -> CalendarDate {
    date.and_time(NaiveTime::MIN + Duration::milliseconds(LAST_MILLISECOND_OF_DAY))
}

/// Parse `yyyy-MM-dd`, `yyyy-MM-ddTHH:MM:SS[.fff]` or the same with a space
/// separator. A bare date is placed at day-start.
pub fn parse_calendar_date(input: &str) -> Result<CalendarDate> {
    let s = input.trim();
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(day_start(date));
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| WeekError::InvalidDate(input.to_string()))
}

/// An ordered pair of dates, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInterval {
    pub min: CalendarDate,
    pub max: CalendarDate,
}

impl DateInterval {
    /// Build an interval from two bounds in either order.
    pub fn new(a: CalendarDate, b: CalendarDate) -> Self {
        if a > b {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min <= date && date <= self.max
    }

    /// Whether `other` lies entirely within this interval.
    pub fn covers(&self, other: &DateInterval) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}
