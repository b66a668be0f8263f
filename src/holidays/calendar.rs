/// Holiday calendar sources
use std::collections::BTreeMap;

use crate::types::HolidayEntry;

/// Supplies the holiday calendar for a given year.
///
/// Implementations must return the same entries for a year across repeated
/// calls and an empty list for years they know nothing about.
pub trait HolidayCalendar: Send + Sync {
    fn holidays(&self, year: i32) -> Vec<HolidayEntry>;
}

/// In-memory holiday calendar keyed by year
#[derive(Debug, Clone, Default)]
pub struct StaticHolidayCalendar {
    by_year: BTreeMap<i32, Vec<HolidayEntry>>,
}

impl StaticHolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = HolidayEntry>,
    {
        let mut calendar = Self::new();
        calendar.extend(entries);
        calendar
    }

    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = HolidayEntry>,
    {
        for entry in entries {
            self.by_year.entry(entry.date.year()).or_default().push(entry);
        }
    }

    /// Years that have at least one entry, ascending
    pub fn years(&self) -> Vec<i32> {
        self.by_year.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.by_year.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HolidayCalendar for StaticHolidayCalendar {
    fn holidays(&self, year: i32) -> Vec<HolidayEntry> {
        self.by_year.get(&year).cloned().unwrap_or_default()
    }
}
