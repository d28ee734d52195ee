//! The configurable first day of the week.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::WeekError;

/// Which ISO weekday begins a week.
///
/// Built from the ISO weekday number (1 = Monday ..= 7 = Sunday) or a weekday
/// name. Any value of this type is valid, so the week operations that take it
/// never fail on the convention; out-of-range numbers are rejected here.
///
/// # Examples
///
/// ```
/// use week_engine::WeekConvention;
///
/// let sunday = WeekConvention::try_from(7).unwrap();
/// assert_eq!(sunday, WeekConvention::SUNDAY);
/// assert_eq!("tue".parse::<WeekConvention>().unwrap().iso_number(), 2);
/// assert!(WeekConvention::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ConventionRepr", into = "u8")]
pub struct WeekConvention(Weekday);

impl WeekConvention {
    /// ISO 8601 (Monday-first), the default.
    pub const MONDAY: Self = Self(Weekday::Mon);
    /// US/Canada convention.
    pub const SUNDAY: Self = Self(Weekday::Sun);
    /// Common in parts of the Middle East.
    pub const SATURDAY: Self = Self(Weekday::Sat);

    /// All seven conventions, Monday first.
    pub const ALL: [Self; 7] = [
        Self(Weekday::Mon),
        Self(Weekday::Tue),
        Self(Weekday::Wed),
        Self(Weekday::Thu),
        Self(Weekday::Fri),
        Self(Weekday::Sat),
        Self(Weekday::Sun),
    ];

    pub const fn new(first_day: Weekday) -> Self {
        Self(first_day)
    }

    /// The weekday that starts each week.
    pub fn first_day(self) -> Weekday {
        self.0
    }

    /// The weekday that ends each week.
    pub fn last_day(self) -> Weekday {
        self.0.pred()
    }

    /// ISO weekday number of the first day (1 = Monday ..= 7 = Sunday).
    pub fn iso_number(self) -> u8 {
        self.0.number_from_monday() as u8
    }

    /// How many days `date` lies after the start of its week (0..=6).
    pub fn days_into_week(self, date: NaiveDate) -> u32 {
        let weekday = date.weekday().num_days_from_monday();
        let first = self.0.num_days_from_monday();
        (weekday + 7 - first) % 7
    }
}

impl Default for WeekConvention {
    fn default() -> Self {
        Self::MONDAY
    }
}

impl From<Weekday> for WeekConvention {
    fn from(first_day: Weekday) -> Self {
        Self(first_day)
    }
}

impl From<WeekConvention> for u8 {
    fn from(convention: WeekConvention) -> Self {
        convention.iso_number()
    }
}

impl TryFrom<u8> for WeekConvention {
    type Error = WeekError;

    fn try_from(iso_number: u8) -> Result<Self, Self::Error> {
        match iso_number {
            1..=7 => Ok(Self::ALL[usize::from(iso_number - 1)]),
            other => Err(WeekError::InvalidConvention(other)),
        }
    }
}

impl FromStr for WeekConvention {
    type Err = WeekError;

    /// Accepts `"1"`..=`"7"` or an English weekday name (`"sunday"`, `"Sun"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::try_from(n);
        }
        s.parse::<Weekday>()
            .map(Self)
            .map_err(|_| WeekError::InvalidWeekday(s.to_string()))
    }
}

impl fmt::Display for WeekConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        };
        f.write_str(name)
    }
}

/// Wire form accepted when deserializing: the ISO number or a weekday name.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConventionRepr {
    Number(u8),
    Name(String),
}

impl TryFrom<ConventionRepr> for WeekConvention {
    type Error = WeekError;

    fn try_from(repr: ConventionRepr) -> Result<Self, Self::Error> {
        match repr {
            ConventionRepr::Number(n) => Self::try_from(n),
            ConventionRepr::Name(name) => name.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_covers_iso_numbering() {
        for (n, expected) in (1u8..=7).zip(WeekConvention::ALL) {
            let convention = WeekConvention::try_from(n).unwrap();
            assert_eq!(convention, expected);
            assert_eq!(convention.iso_number(), n);
        }
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(
            WeekConvention::try_from(0),
            Err(WeekError::InvalidConvention(0))
        );
        assert_eq!(
            WeekConvention::try_from(8),
            Err(WeekError::InvalidConvention(8))
        );
    }

    #[test]
    fn test_parse_names_and_numbers() {
        assert_eq!("7".parse(), Ok(WeekConvention::SUNDAY));
        assert_eq!(" Sunday ".parse(), Ok(WeekConvention::SUNDAY));
        assert_eq!("sat".parse(), Ok(WeekConvention::SATURDAY));
        assert_eq!("MON".parse(), Ok(WeekConvention::MONDAY));
        assert_eq!(
            "funday".parse::<WeekConvention>(),
            Err(WeekError::InvalidWeekday("funday".to_string()))
        );
        assert_eq!(
            "0".parse::<WeekConvention>(),
            Err(WeekError::InvalidConvention(0))
        );
    }

    #[test]
    fn test_default_is_monday() {
        assert_eq!(WeekConvention::default(), WeekConvention::MONDAY);
    }

    #[test]
    fn test_last_day_precedes_first_day() {
        assert_eq!(WeekConvention::MONDAY.last_day(), Weekday::Sun);
        assert_eq!(WeekConvention::SUNDAY.last_day(), Weekday::Sat);
        assert_eq!(WeekConvention::SATURDAY.last_day(), Weekday::Fri);
    }

    #[test]
    fn test_days_into_week() {
        // 2026-02-18 is a Wednesday
        let wed = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
        assert_eq!(WeekConvention::MONDAY.days_into_week(wed), 2);
        assert_eq!(WeekConvention::SUNDAY.days_into_week(wed), 3);
        assert_eq!(WeekConvention::new(Weekday::Wed).days_into_week(wed), 0);
        assert_eq!(WeekConvention::new(Weekday::Thu).days_into_week(wed), 6);
    }

    #[test]
    fn test_serde_uses_iso_number() {
        let json = serde_json::to_string(&WeekConvention::SUNDAY).unwrap();
        assert_eq!(json, "7");
        let back: WeekConvention = serde_json::from_str("7").unwrap();
        assert_eq!(back, WeekConvention::SUNDAY);
        let named: WeekConvention = serde_json::from_str("\"tuesday\"").unwrap();
        assert_eq!(named.iso_number(), 2);
        assert!(serde_json::from_str::<WeekConvention>("9").is_err());
    }

    #[test]
    fn test_display_full_name() {
        assert_eq!(WeekConvention::SATURDAY.to_string(), "Saturday");
    }
}
