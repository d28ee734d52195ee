//! Week-qualified rendering of dates and date ranges.
//!
//! Templates use `yyyy`/`yy` for the year, `MM`/`M` month, `dd`/`d` day,
//! `HH`/`H`, `mm`/`m`, `ss`/`s` for the time of day and a run of `W` for the
//! week number (two or more letters pad to two digits). Text in single quotes
//! is literal, `''` is a quote; every other character is copied through.
//!
//! When the template carries a week placeholder its year fields print the
//! week-year, so `yyyy` and `W` always agree with each other.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use tracing::debug;

use crate::boundary::week_start;
use crate::convention::WeekConvention;
use crate::date::{parse_calendar_date, CalendarDate};
use crate::numbering::{week_number, week_year};

/// The one template rendered without going through the field renderer.
const YEAR_WEEK_TEMPLATE: &str = "yyyy-WW";

// ── Template ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    YearOfCentury,
    Month { padded: bool },
    Day { padded: bool },
    Hour { padded: bool },
    Minute { padded: bool },
    Second { padded: bool },
    Week { padded: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed format template.
///
/// # Examples
///
/// ```
/// use week_engine::Template;
///
/// assert!(Template::parse("yyyy-WW").has_week());
/// assert!(!Template::parse("yyyy-MM-dd").has_week());
/// assert!(!Template::parse("yyyy 'Week'").has_week());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                    continue;
                }
                // quoted run up to the closing quote (or the end of the template)
                while let Some(q) = chars.next() {
                    if q != '\'' {
                        literal.push(q);
                    } else if chars.peek() == Some(&'\'') {
                        chars.next();
                        literal.push('\'');
                    } else {
                        break;
                    }
                }
                continue;
            }

            let mut run = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                run += 1;
            }
            match field_for(c, run) {
                Some(field) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                None => literal.extend(std::iter::repeat_n(c, run)),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the template contains a week-number placeholder.
    pub fn has_week(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Field(Field::Week { .. })))
    }

    fn is_year_week(&self) -> bool {
        self.source == YEAR_WEEK_TEMPLATE
    }

    fn render(&self, base: NaiveDateTime, year: i32, week: u32) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(&render_field(*field, base, year, week)),
            }
        }
        out
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

fn field_for(c: char, run: usize) -> Option<Field> {
    let padded = run >= 2;
    let field = match c {
        'y' if run == 2 => Field::YearOfCentury,
        'y' => Field::Year,
        'M' => Field::Month { padded },
        'd' => Field::Day { padded },
        'H' => Field::Hour { padded },
        'm' => Field::Minute { padded },
        's' => Field::Second { padded },
        'W' => Field::Week { padded },
        _ => return None,
    };
    Some(field)
}

fn render_field(field: Field, base: NaiveDateTime, year: i32, week: u32) -> String {
    fn number(value: u32, padded: bool) -> String {
        if padded {
            format!("{value:02}")
        } else {
            value.to_string()
        }
    }

    match field {
        Field::Year => format!("{year:04}"),
        Field::YearOfCentury => format!("{:02}", year.rem_euclid(100)),
        Field::Month { padded } => number(base.month(), padded),
        Field::Day { padded } => number(base.day(), padded),
        Field::Hour { padded } => number(base.hour(), padded),
        Field::Minute { padded } => number(base.minute(), padded),
        Field::Second { padded } => number(base.second(), padded),
        Field::Week { padded } => number(week, padded),
    }
}

// ── WeekFormatter ───────────────────────────────────────────────────────────

/// Formatting settings a host application can load from its own config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// First day of the week.
    pub convention: WeekConvention,
    pub template: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            convention: WeekConvention::default(),
            template: YEAR_WEEK_TEMPLATE.to_string(),
        }
    }
}

/// A template bound to a week convention, parsed once and reused.
#[derive(Debug, Clone)]
pub struct WeekFormatter {
    template: Template,
    convention: WeekConvention,
}

impl WeekFormatter {
    pub fn new(template: &str, convention: WeekConvention) -> Self {
        Self {
            template: Template::parse(template),
            convention,
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn convention(&self) -> WeekConvention {
        self.convention
    }

    /// Render one date.
    ///
    /// Without a week placeholder the date is printed as `yyyy-MM-dd`.
    pub fn format(&self, date: CalendarDate) -> String {
        if !self.template.has_week() {
            return date.format("%Y-%m-%d").to_string();
        }

        let start = week_start(date, self.convention);
        let week = week_number(start, self.convention);
        let year = week_year(start, date.year());

        if self.template.is_year_week() {
            return format!("{year}-W{week:02}");
        }

        // Late-December days that already belong to next year's week 1 show
        // the week's own start so the month/day fields match the week-year.
        let base = if year > date.year() { start } else { date };
        self.template.render(base, year, week)
    }

    /// Render both ends of a range. A missing bound blanks both strings.
    pub fn format_range(
        &self,
        min: Option<CalendarDate>,
        max: Option<CalendarDate>,
    ) -> (String, String) {
        match (min, max) {
            (Some(min), Some(max)) => (self.format(min), self.format(max)),
            _ => (String::new(), String::new()),
        }
    }

    /// Render both ends of a range given as text.
    ///
    /// Blank input counts as a missing bound; text that is not a date blanks
    /// only its own slot.
    pub fn format_range_str(&self, min: &str, max: &str) -> (String, String) {
        if min.trim().is_empty() || max.trim().is_empty() {
            return (String::new(), String::new());
        }
        (self.format_str(min), self.format_str(max))
    }

    fn format_str(&self, input: &str) -> String {
        match parse_calendar_date(input) {
            Ok(date) => self.format(date),
            Err(err) => {
                debug!(%err, "leaving unformattable slot empty");
                String::new()
            }
        }
    }
}

impl From<&FormatOptions> for WeekFormatter {
    fn from(options: &FormatOptions) -> Self {
        Self::new(&options.template, options.convention)
    }
}

/// Render `[min, max]` as week-qualified strings.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use week_engine::{format_week_range, WeekConvention};
///
/// let min = NaiveDate::from_ymd_opt(2024, 12, 23).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let max = NaiveDate::from_ymd_opt(2024, 12, 29).unwrap().and_hms_opt(23, 59, 59).unwrap();
/// let (a, b) = format_week_range(Some(min), Some(max), "yyyy-WW", WeekConvention::MONDAY);
/// assert_eq!((a.as_str(), b.as_str()), ("2024-W52", "2024-W52"));
/// ```
pub fn format_week_range(
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
    template: &str,
    convention: WeekConvention,
) -> (String, String) {
    WeekFormatter::new(template, convention).format_range(min, max)
}

/// [`format_week_range`] over textual dates, see
/// [`WeekFormatter::format_range_str`].
pub fn format_week_range_str(
    min: &str,
    max: &str,
    template: &str,
    convention: WeekConvention,
) -> (String, String) {
    WeekFormatter::new(template, convention).format_range_str(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn monday(template: &str) -> WeekFormatter {
        WeekFormatter::new(template, WeekConvention::MONDAY)
    }

    // ── Template parsing ────────────────────────────────────────────────

    #[test]
    fn test_parse_splits_fields_and_literals() {
        let t = Template::parse("yyyy/MM-W");
        assert_eq!(
            t.segments,
            vec![
                Segment::Field(Field::Year),
                Segment::Literal("/".to_string()),
                Segment::Field(Field::Month { padded: true }),
                Segment::Literal("-".to_string()),
                Segment::Field(Field::Week { padded: false }),
            ]
        );
    }

    #[test]
    fn test_parse_quoted_literal() {
        let t = Template::parse("'Week' WW, ''yy");
        assert_eq!(
            t.segments,
            vec![
                Segment::Literal("Week ".to_string()),
                Segment::Field(Field::Week { padded: true }),
                Segment::Literal(", '".to_string()),
                Segment::Field(Field::YearOfCentury),
            ]
        );
    }

    #[test]
    fn test_parse_unterminated_quote_runs_to_end() {
        let t = Template::parse("yyyy 'W");
        assert!(!t.has_week());
        assert_eq!(t.as_str(), "yyyy 'W");
    }

    #[test]
    fn test_long_week_run_is_padded() {
        let t = Template::parse("WWW");
        assert_eq!(t.segments, vec![Segment::Field(Field::Week { padded: true })]);
    }

    // ── format ──────────────────────────────────────────────────────────

    #[test]
    fn test_no_week_placeholder_prints_plain_date() {
        assert_eq!(monday("yyyy/MM/dd").format(at(2024, 6, 12, 8)), "2024-06-12");
    }

    #[test]
    fn test_year_week_fast_path() {
        let f = monday("yyyy-WW");
        assert_eq!(f.format(at(2024, 12, 23, 0)), "2024-W52");
        assert_eq!(f.format(at(2024, 12, 31, 0)), "2025-W01");
        assert_eq!(f.format(at(2023, 1, 1, 0)), "2022-W52");
    }

    #[test]
    fn test_rich_template_with_quoted_w() {
        assert_eq!(monday("yyyy-'W'WW").format(at(2024, 6, 12, 8)), "2024-W24");
        assert_eq!(monday("yyyy 'week' W").format(at(2024, 1, 3, 8)), "2024 week 1");
    }

    #[test]
    fn test_rich_template_reanchors_december_week_1() {
        // Tue 2024-12-31 is in 2025-W01; month/day come from the week start
        assert_eq!(
            monday("yyyy-MM-dd WW").format(at(2024, 12, 31, 15)),
            "2025-12-30 01"
        );
    }

    #[test]
    fn test_rich_template_january_day_in_previous_week_year() {
        // Sun 2023-01-01 is in 2022-W52; only the year is swapped
        assert_eq!(monday("yyyy-MM-dd/WW").format(at(2023, 1, 1, 0)), "2022-01-01/52");
    }

    #[test]
    fn test_rich_template_time_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 12)
            .unwrap()
            .and_hms_opt(7, 5, 9)
            .unwrap();
        assert_eq!(monday("yy W H:mm:ss").format(date), "24 24 7:05:09");
    }

    #[test]
    fn test_sunday_convention_week_year() {
        let f = WeekFormatter::new("yyyy-WW", WeekConvention::SUNDAY);
        // Sun 2025-12-28 .. Sat 2026-01-03: four days in 2025, middle day in ISO 2026-W01
        assert_eq!(f.format(at(2026, 1, 2, 0)), "2025-W01");
        assert_eq!(f.format(at(2026, 1, 4, 0)), "2026-W02");
        assert_eq!(f.format(at(2026, 6, 10, 0)), "2026-W24");
    }

    // ── format_week_range ───────────────────────────────────────────────

    #[test]
    fn test_format_week_range_same_week() {
        let (a, b) = format_week_range(
            Some(at(2024, 12, 23, 0)),
            Some(at(2024, 12, 29, 23)),
            "yyyy-WW",
            WeekConvention::MONDAY,
        );
        assert_eq!(a, "2024-W52");
        assert_eq!(b, "2024-W52");
    }

    #[test]
    fn test_format_week_range_missing_bound() {
        let pair = format_week_range(None, Some(at(2024, 1, 1, 0)), "yyyy-WW", WeekConvention::MONDAY);
        assert_eq!(pair, (String::new(), String::new()));
    }

    #[test]
    fn test_format_week_range_str_bad_slot_is_empty() {
        let (a, b) = format_week_range_str("2024-12-23", "yesterday", "yyyy-WW", WeekConvention::MONDAY);
        assert_eq!(a, "2024-W52");
        assert_eq!(b, "");
    }

    #[test]
    fn test_format_week_range_str_blank_is_absent() {
        let pair = format_week_range_str("", "2024-12-23", "yyyy-WW", WeekConvention::MONDAY);
        assert_eq!(pair, (String::new(), String::new()));
    }

    #[test]
    fn test_formatter_from_options() {
        let options = FormatOptions {
            convention: WeekConvention::SUNDAY,
            template: "yyyy 'wk' W".to_string(),
        };
        let f = WeekFormatter::from(&options);
        assert_eq!(f.convention(), WeekConvention::SUNDAY);
        assert_eq!(f.template().as_str(), "yyyy 'wk' W");
        // Sun 2024-01-07 starts the second Sunday-week of 2024
        assert_eq!(f.format(at(2024, 1, 7, 0)), "2024 wk 2");
    }

    #[test]
    fn test_format_options_deserialize_defaults() {
        let options: FormatOptions = serde_json::from_str(r#"{"convention": 7}"#).unwrap();
        assert_eq!(options.convention, WeekConvention::SUNDAY);
        assert_eq!(options.template, "yyyy-WW");
        assert!(serde_json::from_str::<FormatOptions>(r#"{"colour": 1}"#).is_err());
    }
}
