//! First and last day of the week containing a date.

use chrono::Duration;

use crate::convention::WeekConvention;
use crate::date::{day_end, day_start, CalendarDate};

/// Day-start of the week containing `date`.
///
/// Counts back from `date` to the nearest `convention.first_day()` (zero days
/// if `date` already falls on it) and truncates to 00:00:00.000.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use week_engine::{week_start, WeekConvention};
///
/// // Wednesday 2026-02-18
/// let date = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap().and_hms_opt(15, 30, 0).unwrap();
/// assert_eq!(week_start(date, WeekConvention::MONDAY).to_string(), "2026-02-16 00:00:00");
/// assert_eq!(week_start(date, WeekConvention::SUNDAY).to_string(), "2026-02-15 00:00:00");
/// ```
pub fn week_start(date: CalendarDate, convention: WeekConvention) -> CalendarDate {
    let day = date.date();
    let delta = convention.days_into_week(day);
    day_start(day - Duration::days(i64::from(delta)))
}

/// Day-end (23:59:59.999) of the last day of the week containing `date`.
pub fn week_end(date: CalendarDate, convention: WeekConvention) -> CalendarDate {
    let start = week_start(date, convention).date();
    day_end(start + Duration::days(6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn at(y: i32, m: u32, d: u32, h: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_week_start_on_first_day_is_same_day() {
        // 2023-12-25 is a Monday
        let start = week_start(at(2023, 12, 25, 18), WeekConvention::MONDAY);
        assert_eq!(start, at(2023, 12, 25, 0));
    }

    #[test]
    fn test_week_start_crosses_year_boundary() {
        // Wed 2025-01-01 belongs to the Monday week starting 2024-12-30
        let start = week_start(at(2025, 1, 1, 9), WeekConvention::MONDAY);
        assert_eq!(start, at(2024, 12, 30, 0));
    }

    #[test]
    fn test_week_start_sunday_convention() {
        // Sat 2024-01-06 -> Sunday 2023-12-31
        let start = week_start(at(2024, 1, 6, 12), WeekConvention::SUNDAY);
        assert_eq!(start, at(2023, 12, 31, 0));
        assert_eq!(start.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_week_end_is_six_days_later_at_day_end() {
        let end = week_end(at(2023, 12, 27, 3), WeekConvention::MONDAY);
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(end.time().to_string(), "23:59:59.999");
    }

    #[test]
    fn test_week_end_on_last_day_stays() {
        // Saturday is the last day of a Sunday-first week
        let end = week_end(at(2024, 1, 6, 0), WeekConvention::SUNDAY);
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
    }

    #[test]
    fn test_week_start_does_not_touch_input() {
        let input = at(2024, 6, 13, 11);
        let copy = input;
        let _ = week_start(input, WeekConvention::SATURDAY);
        assert_eq!(input, copy);
    }

    #[test]
    fn test_every_convention_lands_on_its_first_day() {
        let date = at(2024, 2, 29, 7);
        for convention in WeekConvention::ALL {
            let start = week_start(date, convention);
            assert_eq!(start.weekday(), convention.first_day());
            assert!(start <= date);
            assert!((date - start).num_days() < 7);
            assert_eq!(week_end(date, convention).weekday(), convention.last_day());
        }
    }
}
