/// Built-in mainland China statutory holiday calendar
use super::calendar::StaticHolidayCalendar;
use crate::types::{CalendarDate, HolidayEntry};

const NEW_YEAR: &str = "New Year's Day";
const SPRING_FESTIVAL: &str = "Spring Festival";
const QINGMING: &str = "Qingming Festival";
const LABOUR_DAY: &str = "Labour Day";
const DRAGON_BOAT: &str = "Dragon Boat Festival";
const MID_AUTUMN: &str = "Mid-Autumn Festival";
const NATIONAL_DAY: &str = "National Day";

/// (month, day, name, is_compensatory_workday)
type Row = (u32, u32, &'static str, bool);

/// China holidays for 2025 (update annually)
const CHINA_2025: &[Row] = &[
    // January 2025
    (1, 1, NEW_YEAR, false),
    (1, 26, SPRING_FESTIVAL, true),
    (1, 28, SPRING_FESTIVAL, false),
    (1, 29, SPRING_FESTIVAL, false),
    (1, 30, SPRING_FESTIVAL, false),
    (1, 31, SPRING_FESTIVAL, false),
    // February 2025
    (2, 1, SPRING_FESTIVAL, false),
    (2, 2, SPRING_FESTIVAL, false),
    (2, 3, SPRING_FESTIVAL, false),
    (2, 4, SPRING_FESTIVAL, false),
    (2, 8, SPRING_FESTIVAL, true),
    // April 2025
    (4, 4, QINGMING, false),
    (4, 5, QINGMING, false),
    (4, 6, QINGMING, false),
    (4, 27, LABOUR_DAY, true),
    // May 2025
    (5, 1, LABOUR_DAY, false),
    (5, 2, LABOUR_DAY, false),
    (5, 3, LABOUR_DAY, false),
    (5, 4, LABOUR_DAY, false),
    (5, 5, LABOUR_DAY, false),
    (5, 31, DRAGON_BOAT, false),
    // June 2025
    (6, 1, DRAGON_BOAT, false),
    (6, 2, DRAGON_BOAT, false),
    // September 2025
    (9, 28, NATIONAL_DAY, true),
    // October 2025 (Mid-Autumn falls inside the National Day week)
    (10, 1, NATIONAL_DAY, false),
    (10, 2, NATIONAL_DAY, false),
    (10, 3, NATIONAL_DAY, false),
    (10, 4, NATIONAL_DAY, false),
    (10, 5, NATIONAL_DAY, false),
    (10, 6, MID_AUTUMN, false),
    (10, 7, NATIONAL_DAY, false),
    (10, 8, NATIONAL_DAY, false),
    (10, 11, NATIONAL_DAY, true),
];

fn rows_for_year(year: i32, rows: &[Row]) -> Vec<HolidayEntry> {
    rows.iter()
        .filter_map(|&(month, day, name, workday)| {
            CalendarDate::from_ymd(year, month, day).map(|date| HolidayEntry {
                date,
                name: name.to_string(),
                is_compensatory_workday: workday,
            })
        })
        .collect()
}

pub fn get_china_holidays_2025() -> Vec<HolidayEntry> {
    rows_for_year(2025, CHINA_2025)
}

impl StaticHolidayCalendar {
    /// Calendar preloaded with every built-in year
    pub fn builtin() -> Self {
        Self::from_entries(get_china_holidays_2025())
    }
}
