/// Clock sources supplying the reference date
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::RwLock;

use crate::types::CalendarDate;

pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;
}

/// Wall clock in a fixed timezone
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        SystemClock { tz }
    }

    /// Local calendar day of an instant in this clock's timezone
    pub fn date_at(&self, now: DateTime<Utc>) -> CalendarDate {
        now.with_timezone(&self.tz).date_naive().into()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        self.date_at(Utc::now())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

/// Clock whose date is moved by hand
#[derive(Debug)]
pub struct ManualClock {
    date: RwLock<CalendarDate>,
}

impl ManualClock {
    pub fn new(date: CalendarDate) -> Self {
        ManualClock {
            date: RwLock::new(date),
        }
    }

    pub fn set(&self, date: CalendarDate) {
        match self.date.write() {
            Ok(mut guard) => *guard = date,
            Err(poisoned) => *poisoned.into_inner() = date,
        }
    }

    /// Move forward one day, returns the new date
    pub fn advance(&self) -> CalendarDate {
        let current = self.today();
        let next = current.next_day().unwrap_or(current);
        self.set(next);
        next
    }
}

impl Clock for ManualClock {
    fn today(&self) -> CalendarDate {
        match self.date.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
