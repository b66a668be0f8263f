pub mod builtin;
pub mod calendar;
pub mod loader;

pub use builtin::get_china_holidays_2025;
pub use calendar::{HolidayCalendar, StaticHolidayCalendar};
