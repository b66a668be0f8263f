/// Core type definitions for the holiday countdown
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CountdownError, Result};

/// An exact calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    /// Parse a `YYYY-MM-DD` day key
    pub fn parse(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(CalendarDate)
            .map_err(|e| CountdownError::InvalidDate(format!("{}: {}", s, e)))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Weekday with Sunday = 0 through Saturday = 6
    pub fn weekday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Signed number of days from `other` to `self`
    pub fn days_since(&self, other: CalendarDate) -> i64 {
        (self.0 - other.0).num_days()
    }

    pub fn day_key(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    pub fn next_day(&self) -> Option<Self> {
        self.0.succ_opt().map(CalendarDate)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.day_key())
    }
}

/// One row of a holiday calendar as supplied by the holiday source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    pub date: CalendarDate,
    pub name: String,
    #[serde(default)]
    pub is_compensatory_workday: bool,
}

impl HolidayEntry {
    pub fn holiday(date: CalendarDate, name: &str) -> Self {
        HolidayEntry {
            date,
            name: name.to_string(),
            is_compensatory_workday: false,
        }
    }

    pub fn workday(date: CalendarDate, name: &str) -> Self {
        HolidayEntry {
            date,
            name: name.to_string(),
            is_compensatory_workday: true,
        }
    }
}

/// A named holiday occurrence spanning one or more days.
///
/// The first member is held apart from the rest, so a period always has at
/// least one day and its bounds are derived from the members on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayPeriod {
    name: String,
    first: CalendarDate,
    rest: Vec<CalendarDate>,
}

impl HolidayPeriod {
    /// Returns `None` for an empty date list
    pub fn new(name: impl Into<String>, dates: Vec<CalendarDate>) -> Option<Self> {
        let mut members = dates.into_iter();
        let first = members.next()?;
        Some(HolidayPeriod {
            name: name.into(),
            first,
            rest: members.collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn earliest_date(&self) -> CalendarDate {
        self.rest.iter().copied().fold(self.first, CalendarDate::min)
    }

    pub fn latest_date(&self) -> CalendarDate {
        self.rest.iter().copied().fold(self.first, CalendarDate::max)
    }

    /// Inclusive range check against the period bounds
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.earliest_date() <= date && date <= self.latest_date()
    }

    /// Number of member days
    pub fn day_count(&self) -> usize {
        1 + self.rest.len()
    }
}

/// How countdown results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Clock
    pub timezone: String,
    pub poll_interval_sec: u64,

    // Holiday Data
    pub holiday_file: Option<String>,

    // Logging
    pub log_level: String,
    pub log_format: LogFormat,

    // Output
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timezone: "Asia/Shanghai".to_string(),
            poll_interval_sec: 60,
            holiday_file: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            output_format: OutputFormat::Text,
        }
    }
}
