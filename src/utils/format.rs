//! Swedish display formatting for the vacancy views.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::fmt;

use crate::config::Config;
use crate::models::property::QueuePosition;

const NBSP: char = '\u{a0}';

const MONTHS_SHORT: [&str; 12] = [
    "jan.", "feb.", "mars", "apr.", "maj", "juni", "juli", "aug.", "sep.", "okt.", "nov.",
    "dec.",
];

/// "3 av 12", or "12 i kö" when the viewer is not queued.
pub fn format_queue_position(queue: &QueuePosition) -> String {
    match queue.position {
        Some(position) => format!("{} av {}", position, queue.total_in_queue),
        None => format!("{} i kö", queue.total_in_queue),
    }
}

/// Groups thousands with non-breaking spaces: 13156 -> "13 156".
pub fn format_integer(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(NBSP);
        }
        out.push(c);
    }
    out
}

/// Fixed-point with a decimal comma: 34.5 -> "34,5".
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let rounded = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let grouped = int_part
        .parse::<u64>()
        .map_or_else(|_| int_part.to_string(), format_integer);
    let sign = if value < 0.0 && rounded.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac_part}")
    }
}

/// "5 432 kr"
pub fn format_rent(rent: u32) -> String {
    format!("{}{NBSP}kr", format_integer(u64::from(rent)))
}

/// Rent as a share of the monthly study grant, in percent.
pub fn grant_share(rent: u32) -> f64 {
    100.0 * f64::from(rent) / f64::from(Config::STUDY_GRANT_KR)
}

/// "41,3 %"
pub fn format_grant_share(rent: u32) -> String {
    format!("{}{NBSP}%", format_decimal(grant_share(rent), 1))
}

/// "34,5"
pub fn format_size(size_sqm: f32) -> String {
    format_decimal(f64::from(size_sqm), 1)
}

/// "22362" -> "223 62"; anything else is returned unchanged.
pub fn format_postal_code(postal_code: &str) -> String {
    if postal_code.len() == 5 && postal_code.chars().all(|c| c.is_ascii_digit()) {
        format!("{}{NBSP}{}", &postal_code[..3], &postal_code[3..])
    } else {
        postal_code.to_string()
    }
}

fn month_short(date: NaiveDate) -> &'static str {
    MONTHS_SHORT[date.month0() as usize]
}

fn format_day(date: NaiveDate, with_month: bool, with_year: bool) -> String {
    match (with_month, with_year) {
        (true, true) => format!("{} {} {}", date.day(), month_short(date), date.year()),
        (true, false) => format!("{} {}", date.day(), month_short(date)),
        (false, true) => format!("{} {}", date.day(), date.year()),
        (false, false) => date.day().to_string(),
    }
}

/// A date with the year left out when it is the current one: "1 nov.".
pub fn format_date(date: NaiveDate, today: NaiveDate) -> String {
    format_day(date, true, date.year() != today.year())
}

/// A rendered date range, kept in parts so each end can be styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeText {
    pub from: String,
    pub separator: &'static str,
    pub until: String,
}

impl fmt::Display for DateRangeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, self.separator, self.until)
    }
}

/// Formats `from`–`until` with shared parts elided.
///
/// The start drops the year when both ends share it, and the month when
/// both ends share year and month. The end drops the year only when the
/// whole range lies in the current year.
pub fn format_date_range(from: NaiveDate, until: NaiveDate, today: NaiveDate) -> DateRangeText {
    let same_year = from.year() == until.year();
    let same_month = same_year && from.month() == until.month();
    let current_year = same_year && from.year() == today.year();

    DateRangeText {
        from: format_day(from, !same_month, !same_year),
        separator: if same_month { "–" } else { " – " },
        until: format_day(until, true, !current_year),
    }
}

/// Today's date in the display calendar.
pub fn today(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&Config::TIME_ZONE).date_naive()
}

/// "14:05:09" in display time.
pub fn format_clock(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Config::TIME_ZONE)
        .format("%H:%M:%S")
        .to_string()
}

/// Chart axis label for a Unix timestamp: "3 okt. 14:05".
pub fn format_archive_timestamp(secs: i64) -> Option<String> {
    let local = DateTime::from_timestamp(secs, 0)?.with_timezone(&Config::TIME_ZONE);
    Some(format!(
        "{} {}",
        format_day(local.date_naive(), true, false),
        local.format("%H:%M")
    ))
}
