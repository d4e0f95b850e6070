use serde::Serialize;

use crate::models::EventInfo;

pub const UNTIL_FINISHED_SUFFIX: &str = " – Selesai";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEnd<'a> {
    /// Explicit range; the end time may still be missing.
    Until(Option<&'a str>),
    /// Runs until the event finishes.
    UntilFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource<'a> {
    EventSchedule,
    Explicit {
        start: &'a str,
        end: TimeEnd<'a>,
        timezone: Option<&'a str>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTimeRange {
    pub text: String,
    pub timezone: Option<String>,
}

impl DisplayTimeRange {
    pub fn resolve(source: TimeSource<'_>, event: &EventInfo) -> Self {
        match source {
            TimeSource::EventSchedule => Self {
                text: event.time_display.clone(),
                timezone: event.timezone.clone(),
            },
            TimeSource::Explicit {
                start,
                end,
                timezone,
            } => Self {
                text: format_time_range(start, end),
                timezone: timezone
                    .map(str::to_string)
                    .or_else(|| event.timezone.clone()),
            },
        }
    }

    /// Time text followed by its timezone label, e.g. "19:00 - 21:00 WIB".
    pub fn labelled(&self) -> String {
        match self.timezone.as_deref().map(str::trim) {
            Some(tz) if !tz.is_empty() && !self.text.is_empty() => {
                format!("{} {}", self.text, tz)
            }
            _ => self.text.clone(),
        }
    }
}

pub fn format_time_range(start: &str, end: TimeEnd<'_>) -> String {
    match end {
        TimeEnd::Until(Some(end)) => format!("{} - {}", start, end),
        TimeEnd::Until(None) => start.to_string(),
        TimeEnd::UntilFinished => format!("{}{}", start, UNTIL_FINISHED_SUFFIX),
    }
}
