//! Natural language date recognition.
//!
//! Scans free text for date phrases and resolves each one to a calendar day
//! relative to a reference date. Supported phrases:
//! - `today`, `tonight`, `tomorrow` (`tmr`, `tmrw`), `yesterday`
//! - `friday`, `fri`, `next friday`, `this fri`, `last monday`, `on tuesday`
//! - `in 3 days`, `in a week`, `in two months`, `3 days ago`
//! - `next week`, `next month`, `next year`
//! - `june 5`, `Jun 5th`, `5 june`, `june 5, 2026`
//! - `6/5`, `6/5/26`, `2026-06-05`
//!
//! Matches never overlap and are reported left to right.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

/// Internal failure of the date engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateEngineError {
    /// A relative offset could not be represented as a calendar date.
    #[error("date offset out of range: {0}")]
    OutOfRange(String),
}

/// A date phrase found in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// Byte offset of the first character of the phrase.
    pub start: usize,
    /// Byte offset one past the end of the phrase.
    pub end: usize,
    /// The phrase exactly as typed.
    pub text: String,
    /// Canonical spelling: lowercase, single spaces, abbreviations expanded.
    pub normalized: String,
    /// The calendar day the phrase refers to.
    pub date: NaiveDate,
    /// Whether both the day and the month were stated explicitly.
    pub explicit_day_month: bool,
}

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const MONTH: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";

// "sat" and "sun" are only accepted after a modifier; bare they are ordinary words.
const WEEKDAY: &str =
    "monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tues|tue|wed|thurs|thur|thu|fri";

const COUNT: &str = r"\d+|an|a|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve";

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternatives = [
        r"(?P<iso>\d{4}-\d{1,2}-\d{1,2})".to_string(),
        r"(?P<num_m>\d{1,2})/(?P<num_d>\d{1,2})(?:/(?P<num_y>\d{4}|\d{2}))?".to_string(),
        format!(
            r"(?P<md_month>{MONTH})\.?\s+(?P<md_day>\d{{1,2}})(?:st|nd|rd|th)?(?:,?\s+(?P<md_year>\d{{4}}))?"
        ),
        format!(
            r"(?P<dm_day>\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?(?P<dm_month>{MONTH})(?:,?\s+(?P<dm_year>\d{{4}}))?"
        ),
        format!(r"in\s+(?P<in_n>{COUNT})\s+(?P<in_unit>day|week|month|year)s?"),
        format!(r"(?P<ago_n>{COUNT})\s+(?P<ago_unit>day|week|month|year)s?\s+ago"),
        r"next\s+(?P<period>week|month|year)".to_string(),
        format!(r"(?P<wd_mod>next|this|last|on)\s+(?P<wd_mod_day>{WEEKDAY}|sat|sun)"),
        format!(r"(?P<wd>{WEEKDAY})"),
        r"(?P<word>today|tonight|tomorrow|tmrw|tmr|yesterday)".to_string(),
    ];
    let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
    Regex::new(&pattern).unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

/// Scan `text` for date phrases, resolving them against `today`.
///
/// Phrases naming an impossible calendar day (`2/30`, `june 31`) are skipped.
///
/// # Errors
///
/// Returns [`DateEngineError::OutOfRange`] if a relative offset overflows the
/// calendar (e.g. `in 99999999999 years`).
pub fn scan_dates(text: &str, today: NaiveDate) -> Result<Vec<DateMatch>, DateEngineError> {
    let mut matches = Vec::new();

    for caps in DATE_PATTERN.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if let Some((date, normalized, explicit_day_month)) = resolve(&caps, today)? {
            matches.push(DateMatch {
                start: whole.start(),
                end: whole.end(),
                text: whole.as_str().to_string(),
                normalized,
                date,
                explicit_day_month,
            });
        }
    }

    Ok(matches)
}

/// Parse a string that consists of exactly one date phrase.
///
/// Returns `None` if the input is not a single recognized phrase.
#[must_use]
pub fn parse_natural_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();
    match scan_dates(input, today).ok()?.as_slice() {
        [only] if only.start == 0 && only.end == input.len() => Some(only.date),
        _ => None,
    }
}

type Resolved = Option<(NaiveDate, String, bool)>;

fn resolve(caps: &Captures<'_>, today: NaiveDate) -> Result<Resolved, DateEngineError> {
    let text = caps.get(0).map_or("", |m| m.as_str());
    let group = |name: &str| caps.name(name).map(|m| m.as_str().to_lowercase());
    let out_of_range = || DateEngineError::OutOfRange(text.to_string());
    let forward = |date: NaiveDate, days: u64| {
        date.checked_add_days(Days::new(days)).ok_or_else(out_of_range)
    };
    let back = |date: NaiveDate, days: u64| {
        date.checked_sub_days(Days::new(days)).ok_or_else(out_of_range)
    };

    if let Some(iso) = group("iso") {
        return Ok(NaiveDate::parse_from_str(&iso, "%Y-%m-%d")
            .ok()
            .map(|date| (date, iso, true)));
    }

    if let (Some(m), Some(d)) = (group("num_m"), group("num_d")) {
        let date = calendar_day(&m, &d, group("num_y").as_deref(), today);
        return Ok(date.map(|date| (date, text.to_lowercase(), true)));
    }

    if let (Some(month), Some(day)) = (group("md_month"), group("md_day")) {
        return Ok(month_day(&month, &day, group("md_year").as_deref(), today));
    }

    if let (Some(day), Some(month)) = (group("dm_day"), group("dm_month")) {
        return Ok(month_day(&month, &day, group("dm_year").as_deref(), today));
    }

    if let (Some(n), Some(unit)) = (group("in_n"), group("in_unit")) {
        let amount = parse_count(&n, text)?;
        let date = shift(today, amount, &unit, true, text)?;
        let plural = if amount == 1 { "" } else { "s" };
        return Ok(Some((date, format!("in {n} {unit}{plural}"), false)));
    }

    if let (Some(n), Some(unit)) = (group("ago_n"), group("ago_unit")) {
        let amount = parse_count(&n, text)?;
        let date = shift(today, amount, &unit, false, text)?;
        let plural = if amount == 1 { "" } else { "s" };
        return Ok(Some((date, format!("{n} {unit}{plural} ago"), false)));
    }

    if let Some(period) = group("period") {
        let date = match period.as_str() {
            "week" => {
                let until_monday = days_until(today.weekday(), Weekday::Mon);
                forward(today, if until_monday == 0 { 7 } else { until_monday })?
            },
            "month" => shift(today, 1, "month", true, text)?,
            _ => shift(today, 1, "year", true, text)?,
        };
        return Ok(Some((date, format!("next {period}"), false)));
    }

    if let (Some(modifier), Some(day)) = (group("wd_mod"), group("wd_mod_day")) {
        let Some(target) = weekday_from_name(&day) else {
            return Ok(None);
        };
        let ahead = days_until(today.weekday(), target);
        let date = match modifier.as_str() {
            "this" => forward(today, ahead)?,
            "next" => forward(today, ahead + 7)?,
            "last" => {
                let week_start = back(today, u64::from(today.weekday().num_days_from_monday()))?;
                forward(back(week_start, 7)?, u64::from(target.num_days_from_monday()))?
            },
            _ => forward(today, if ahead == 0 { 7 } else { ahead })?,
        };
        return Ok(Some((date, format!("{modifier} {}", weekday_name(target)), false)));
    }

    if let Some(day) = group("wd") {
        let Some(target) = weekday_from_name(&day) else {
            return Ok(None);
        };
        let ahead = days_until(today.weekday(), target);
        let date = forward(today, if ahead == 0 { 7 } else { ahead })?;
        return Ok(Some((date, weekday_name(target).to_string(), false)));
    }

    if let Some(word) = group("word") {
        let (date, normalized) = match word.as_str() {
            "today" | "tonight" => (today, word),
            "yesterday" => (back(today, 1)?, word),
            _ => (forward(today, 1)?, "tomorrow".to_string()),
        };
        return Ok(Some((date, normalized, false)));
    }

    Ok(None)
}

fn month_day(month: &str, day: &str, year: Option<&str>, today: NaiveDate) -> Resolved {
    let index = month_from_name(month)?;
    let date = calendar_day(&index.to_string(), day, year, today)?;
    let day: u32 = day.parse().ok()?;
    let name = MONTH_NAMES[usize::try_from(index - 1).ok()?];
    let normalized = year.map_or_else(
        || format!("{name} {day}"),
        |year| format!("{name} {day} {year}"),
    );
    Some((date, normalized, true))
}

/// Build a date from month/day/year strings.
///
/// Without a year the current year is used, rolling to next year once the
/// day has passed. Two-digit years are taken as 20xx.
fn calendar_day(month: &str, day: &str, year: Option<&str>, today: NaiveDate) -> Option<NaiveDate> {
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;

    if let Some(year) = year {
        let year: i32 = year.parse().ok()?;
        let year = if year < 100 { 2000 + year } else { year };
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let this_year = NaiveDate::from_ymd_opt(today.year(), month, day);
    match this_year {
        Some(date) if date >= today => Some(date),
        _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
    }
}

fn shift(
    from: NaiveDate,
    amount: u64,
    unit: &str,
    forward: bool,
    text: &str,
) -> Result<NaiveDate, DateEngineError> {
    let out_of_range = || DateEngineError::OutOfRange(text.to_string());

    let shifted = match unit {
        "day" | "week" => {
            let days = if unit == "week" {
                amount.checked_mul(7).ok_or_else(out_of_range)?
            } else {
                amount
            };
            if forward {
                from.checked_add_days(Days::new(days))
            } else {
                from.checked_sub_days(Days::new(days))
            }
        },
        _ => {
            let months = if unit == "year" {
                amount.checked_mul(12).ok_or_else(out_of_range)?
            } else {
                amount
            };
            let months = Months::new(u32::try_from(months).map_err(|_| out_of_range())?);
            if forward {
                from.checked_add_months(months)
            } else {
                from.checked_sub_months(months)
            }
        },
    };

    shifted.ok_or_else(out_of_range)
}

fn parse_count(word: &str, text: &str) -> Result<u64, DateEngineError> {
    let value = match word {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        digits => digits
            .parse()
            .map_err(|_| DateEngineError::OutOfRange(text.to_string()))?,
    };
    Ok(value)
}

/// Days from `from` forward to the next `to` (0 when they are the same day).
fn days_until(from: Weekday, to: Weekday) -> u64 {
    u64::from((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.get(..3)? {
        "mon" => Some(Weekday::Mon),
        "tue" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?;
    MONTH_NAMES
        .iter()
        .position(|month| month.starts_with(prefix))
        .and_then(|index| u32::try_from(index + 1).ok())
}
