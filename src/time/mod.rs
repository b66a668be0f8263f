pub mod clock;
pub mod rollover;

pub use clock::{Clock, FixedClock, ManualClock, SystemClock};
pub use rollover::DayRollover;
