/// Calendar day rollover detection
use crate::types::CalendarDate;

#[derive(Debug, Clone, Default)]
pub struct DayRollover {
    last: Option<CalendarDate>,
}

impl DayRollover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the date when it differs from the previous observation
    pub fn observe(&mut self, today: CalendarDate) -> Option<CalendarDate> {
        if self.last == Some(today) {
            return None;
        }
        self.last = Some(today);
        Some(today)
    }

    pub fn last(&self) -> Option<CalendarDate> {
        self.last
    }
}
