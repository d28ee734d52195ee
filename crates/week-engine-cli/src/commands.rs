use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use week_engine::{
    cross_year_weeks, first_week_start, parse_calendar_date, week_for_key, week_info,
    weeks_of_year, CalendarDate, DateInterval, FormatOptions, WeekFormatter, WeekInfo, WeekKey,
};

use crate::cli::{CrossYearArgs, FormatArgs, KeyArgs, LookupArgs, RangeArgs, YearArgs};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, plain: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", plain());
        }
        Ok(())
    }

    fn emit_weeks(&self, weeks: &[WeekInfo]) -> Result<()> {
        self.emit(&weeks, || {
            weeks
                .iter()
                .map(week_line)
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

fn show_day(date: CalendarDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn show_instant(date: CalendarDate) -> String {
    date.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

fn week_line(week: &WeekInfo) -> String {
    format!("{}\t{}\t{}", week.key, show_day(week.start), show_day(week.end))
}

fn parse_date(input: &str) -> Result<CalendarDate> {
    parse_calendar_date(input).with_context(|| format!("cannot read date '{input}'"))
}

pub fn key(args: KeyArgs, options: &FormatOptions, out: Output) -> Result<()> {
    let date = parse_date(&args.date)?;
    let week = week_info(date, options.convention);
    out.emit(&week, || week_line(&week))
}

pub fn lookup(args: LookupArgs, options: &FormatOptions, out: Output) -> Result<()> {
    let key: WeekKey = args.key.parse()?;
    let week = week_for_key(key, options.convention)?;
    out.emit(&week, || week_line(&week))
}

pub fn align(args: RangeArgs, options: &FormatOptions, out: Output) -> Result<()> {
    let picked = DateInterval::new(parse_date(&args.min)?, parse_date(&args.max)?);
    let aligned = picked.align_to_weeks(options.convention);
    info!(
        weeks = picked.weeks(options.convention).len(),
        "aligned range to whole weeks"
    );
    out.emit(&aligned, || {
        format!("{}\t{}", show_instant(aligned.min), show_instant(aligned.max))
    })
}

pub fn format(args: FormatArgs, options: &FormatOptions, out: Output) -> Result<()> {
    let formatter = WeekFormatter::from(options);
    let (min, max) = formatter.format_range_str(&args.min, &args.max);
    out.emit(&json!({ "min": min, "max": max }), || format!("{min}\t{max}"))
}

pub fn first_week(args: YearArgs, options: &FormatOptions, out: Output) -> Result<()> {
    let start = first_week_start(args.year, options.convention)?;
    out.emit(&start, || show_day(start))
}

pub fn weeks(args: YearArgs, options: &FormatOptions, out: Output) -> Result<()> {
    let weeks: Vec<WeekInfo> = weeks_of_year(args.year, options.convention)?.collect();
    info!(year = args.year, count = weeks.len(), "listed weeks");
    out.emit_weeks(&weeks)
}

pub fn cross_year(args: CrossYearArgs, options: &FormatOptions, out: Output) -> Result<()> {
    let weeks = cross_year_weeks(args.from, args.to, options.convention)?;
    info!(count = weeks.len(), "found cross-year weeks");
    out.emit_weeks(&weeks)
}
