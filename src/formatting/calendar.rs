//! Indonesian (id-ID) calendar tokens.

use chrono::{Datelike, NaiveDate};

use crate::utils::error::DisplayError;

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, DisplayError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DisplayError::MalformedDate(raw.to_string()))
}

/// "1 Maret 2024"
pub fn day_month_year(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(date), date.year())
}

/// "1 Maret"
pub fn day_month(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_name(date))
}

/// "01 Maret 2024"
pub fn padded_day_month_year(date: NaiveDate) -> String {
    format!("{:02} {} {}", date.day(), month_name(date), date.year())
}

/// Formats `raw` with `render`, or hands it back untouched when it does not parse.
pub fn format_or_raw(raw: &str, render: fn(NaiveDate) -> String) -> String {
    match parse_iso_date(raw) {
        Ok(date) => render(date),
        Err(e) => {
            e.log();
            raw.to_string()
        }
    }
}
