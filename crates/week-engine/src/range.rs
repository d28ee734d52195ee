//! Snapping date ranges to whole weeks and walking the weeks of a range.

use chrono::Duration;

use crate::boundary::{week_end, week_start};
use crate::convention::WeekConvention;
use crate::date::{CalendarDate, DateInterval};
use crate::numbering::{week_info, WeekInfo};

/// Widen a picked range to the whole weeks it touches.
///
/// A range with a missing bound cannot be aligned and is handed back as is.
/// Bounds given in reverse order are swapped first. The result starts at
/// day-start of the first week and ends at day-end of the last one.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use week_engine::{align_to_weeks, WeekConvention};
///
/// let wed = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let fri = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let (min, max) = align_to_weeks(Some(fri), Some(wed), WeekConvention::MONDAY);
/// assert_eq!(min.unwrap().to_string(), "2024-01-01 00:00:00");
/// assert_eq!(max.unwrap().to_string(), "2024-01-14 23:59:59.999");
/// ```
pub fn align_to_weeks(
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
    convention: WeekConvention,
) -> (Option<CalendarDate>, Option<CalendarDate>) {
    match (min, max) {
        (Some(a), Some(b)) => {
            let aligned = DateInterval::new(a, b).align_to_weeks(convention);
            (Some(aligned.min), Some(aligned.max))
        }
        partial => partial,
    }
}

impl DateInterval {
    /// This interval widened to whole weeks. Idempotent.
    pub fn align_to_weeks(&self, convention: WeekConvention) -> DateInterval {
        DateInterval {
            min: week_start(self.min, convention),
            max: week_end(self.max, convention),
        }
    }

    /// Whether both bounds already sit on week boundaries.
    pub fn is_week_aligned(&self, convention: WeekConvention) -> bool {
        self.align_to_weeks(convention) == *self
    }

    /// Every week this interval touches, in order.
    pub fn weeks(&self, convention: WeekConvention) -> Weeks {
        weeks_between(self.min, self.max, convention)
    }
}

/// Iterator over consecutive weeks, see [`weeks_between`].
#[derive(Debug, Clone)]
pub struct Weeks {
    next_start: CalendarDate,
    last_start: CalendarDate,
    convention: WeekConvention,
}

impl Iterator for Weeks {
    type Item = WeekInfo;

    fn next(&mut self) -> Option<WeekInfo> {
        if self.next_start > self.last_start {
            return None;
        }
        let info = week_info(self.next_start, self.convention);
        self.next_start += Duration::days(7);
        Some(info)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next_start > self.last_start {
            0
        } else {
            ((self.last_start - self.next_start).num_days() / 7 + 1) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Weeks {}

/// Every week touching `[first, last]` (either order), earliest first.
pub fn weeks_between(
    first: CalendarDate,
    last: CalendarDate,
    convention: WeekConvention,
) -> Weeks {
    let interval = DateInterval::new(first, last);
    Weeks {
        next_start: week_start(interval.min, convention),
        last_start: week_start(interval.max, convention),
        convention,
    }
}
