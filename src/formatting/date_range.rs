use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::calendar::{day_month, day_month_year, format_or_raw, parse_iso_date};
use crate::models::EventInfo;

pub const FOLLOWS_EVENT_SCHEDULE: &str = "Mengikuti Jadwal Event";

/// Where a ticket's validity dates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource<'a> {
    EventSchedule,
    Explicit { start: &'a str, end: Option<&'a str> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayDateRange {
    pub text: String,
    pub inherited: bool,
}

impl DisplayDateRange {
    pub fn resolve(source: DateSource<'_>, event: &EventInfo) -> Self {
        match source {
            DateSource::EventSchedule => Self {
                text: event.date_display.clone(),
                inherited: true,
            },
            DateSource::Explicit { start, end } => Self {
                text: format_date_range(start, end),
                inherited: false,
            },
        }
    }
}

/// Formats optional ticket dates; no start date means the event schedule applies.
pub fn format_ticket_date_range(start: Option<&str>, end: Option<&str>) -> String {
    match start {
        Some(start) => format_date_range(start, end),
        None => FOLLOWS_EVENT_SCHEDULE.to_string(),
    }
}

pub fn format_date_range(start: &str, end: Option<&str>) -> String {
    let end = match end {
        Some(end) if end != start => end,
        _ => return format_or_raw(start, day_month_year),
    };

    match (parse_iso_date(start), parse_iso_date(end)) {
        (Ok(s), Ok(e)) => span(s, e),
        _ => format!(
            "{} - {}",
            format_or_raw(start, day_month_year),
            format_or_raw(end, day_month_year)
        ),
    }
}

fn span(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        day_month_year(start)
    } else if start.year() != end.year() {
        format!("{} - {}", day_month_year(start), day_month_year(end))
    } else if start.month() != end.month() {
        format!("{} - {}", day_month(start), day_month_year(end))
    } else {
        format!("{} - {}", start.day(), day_month_year(end))
    }
}
