pub mod engine;
pub mod message;
pub mod service;

pub use engine::{
    compute_status, holiday_periods, upcoming_holidays, weekend_proximity,
    HolidayCountdownEngine, UPCOMING_LIMIT,
};
pub use message::{CountdownReport, StatusMessage, WeekendProximity};
pub use service::CountdownService;
