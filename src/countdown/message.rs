/// Status messages produced by the countdown engine
use serde::Serialize;
use std::fmt;

use crate::types::CalendarDate;

/// Where the reference date sits relative to the coming weekend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekendProximity {
    /// Monday to Friday, days left until Saturday (1..=5)
    DaysAway(u32),
    Saturday,
    Sunday,
}

impl WeekendProximity {
    /// Signed day count: days until Saturday, -1 on Saturday, -2 on Sunday
    pub fn days(&self) -> i32 {
        match self {
            WeekendProximity::DaysAway(n) => *n as i32,
            WeekendProximity::Saturday => -1,
            WeekendProximity::Sunday => -2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    DaysToWeekend(u32),
    WeekendTomorrow,
    WeekendToday,
    BackToWorkTomorrow,
    InHoliday { name: String },
    LastHolidayDay { name: String },
    Upcoming { name: String, days: i64 },
}

impl StatusMessage {
    pub fn weekend(proximity: WeekendProximity) -> Self {
        match proximity {
            WeekendProximity::DaysAway(1) => StatusMessage::WeekendTomorrow,
            WeekendProximity::DaysAway(n) => StatusMessage::DaysToWeekend(n),
            WeekendProximity::Saturday => StatusMessage::WeekendToday,
            WeekendProximity::Sunday => StatusMessage::BackToWorkTomorrow,
        }
    }

    pub fn is_upcoming(&self) -> bool {
        matches!(self, StatusMessage::Upcoming { .. })
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::DaysToWeekend(n) => write!(f, "distance to weekend: {} days", n),
            StatusMessage::WeekendTomorrow => write!(f, "tomorrow is the weekend"),
            StatusMessage::WeekendToday => write!(f, "today is the weekend"),
            StatusMessage::BackToWorkTomorrow => write!(f, "back to work tomorrow"),
            StatusMessage::InHoliday { name } => write!(f, "{} holiday — enjoy the rest", name),
            StatusMessage::LastHolidayDay { name } => {
                write!(f, "last day of {}, back to work tomorrow", name)
            }
            StatusMessage::Upcoming { name, days } => write!(f, "{} days until {}", days, name),
        }
    }
}

/// Rendered countdown for one reference date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownReport {
    pub date: CalendarDate,
    pub messages: Vec<String>,
}

impl CountdownReport {
    pub fn new(date: CalendarDate, messages: &[StatusMessage]) -> Self {
        CountdownReport {
            date,
            messages: messages.iter().map(ToString::to_string).collect(),
        }
    }
}
