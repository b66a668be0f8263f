/// Holiday countdown computation
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use super::message::{CountdownReport, StatusMessage, WeekendProximity};
use crate::holidays::HolidayCalendar;
use crate::types::{CalendarDate, HolidayEntry, HolidayPeriod};

/// Maximum number of upcoming holidays listed after the status line
pub const UPCOMING_LIMIT: usize = 5;

pub fn weekend_proximity(date: CalendarDate) -> WeekendProximity {
    match date.weekday() {
        6 => WeekendProximity::Saturday,
        0 => WeekendProximity::Sunday,
        weekday => WeekendProximity::DaysAway(6 - weekday),
    }
}

/// Group the non-workday entries by name, ordered by first day.
///
/// Periods starting on the same day keep name order.
pub fn holiday_periods(entries: &[HolidayEntry]) -> Vec<HolidayPeriod> {
    let grouped = entries
        .iter()
        .filter(|e| !e.is_compensatory_workday)
        .fold(BTreeMap::<&str, Vec<CalendarDate>>::new(), |mut acc, e| {
            acc.entry(e.name.as_str()).or_default().push(e.date);
            acc
        });

    let mut periods: Vec<HolidayPeriod> = grouped
        .into_iter()
        .filter_map(|(name, dates)| HolidayPeriod::new(name, dates))
        .collect();
    periods.sort_by_key(|p| p.earliest_date());
    periods
}

/// Holiday status if `date` is itself a holiday entry, otherwise the weekend line.
///
/// Uses exact day matching against the entries rather than the period
/// ranges, so a gap day inside a period still gets weekend messaging.
fn todays_message(
    date: CalendarDate,
    entries: &[HolidayEntry],
    periods: &[HolidayPeriod],
) -> StatusMessage {
    let period = entries
        .iter()
        .filter(|e| !e.is_compensatory_workday)
        .find(|e| e.date == date)
        .and_then(|entry| periods.iter().find(|p| p.name() == entry.name));

    match period {
        Some(p) if p.latest_date() == date => StatusMessage::LastHolidayDay {
            name: p.name().to_string(),
        },
        Some(p) => StatusMessage::InHoliday {
            name: p.name().to_string(),
        },
        None => StatusMessage::weekend(weekend_proximity(date)),
    }
}

/// Nearest holidays strictly after `date`, skipping any period `date` is inside
pub fn upcoming_holidays(date: CalendarDate, periods: &[HolidayPeriod]) -> Vec<StatusMessage> {
    periods
        .iter()
        .filter(|p| {
            p.earliest_date() > date || (p.latest_date() < date && !p.contains(date))
        })
        .map(|p| (p, p.earliest_date().days_since(date)))
        .filter(|(_, left_days)| *left_days > 0)
        .take(UPCOMING_LIMIT)
        .map(|(p, left_days)| StatusMessage::Upcoming {
            name: p.name().to_string(),
            days: left_days,
        })
        .collect()
}

/// Status line followed by up to five upcoming holidays
pub fn compute_status(date: CalendarDate, entries: &[HolidayEntry]) -> Vec<StatusMessage> {
    let periods = holiday_periods(entries);

    let mut messages = Vec::with_capacity(1 + UPCOMING_LIMIT);
    messages.push(todays_message(date, entries, &periods));
    messages.extend(upcoming_holidays(date, &periods));
    messages
}

/// Countdown engine bound to a holiday calendar source
#[derive(Clone)]
pub struct HolidayCountdownEngine {
    calendar: Arc<dyn HolidayCalendar>,
}

impl HolidayCountdownEngine {
    pub fn new(calendar: Arc<dyn HolidayCalendar>) -> Self {
        HolidayCountdownEngine { calendar }
    }

    pub fn status(&self, date: CalendarDate) -> Vec<StatusMessage> {
        let entries = self.calendar.holidays(date.year());
        if entries.is_empty() {
            debug!("No holiday data for {}", date.year());
        }

        let messages = compute_status(date, &entries);
        debug!(
            "Countdown for {}: {} message(s) from {} entries",
            date,
            messages.len(),
            entries.len()
        );
        messages
    }

    pub fn messages(&self, date: CalendarDate) -> Vec<String> {
        self.status(date).iter().map(ToString::to_string).collect()
    }

    pub fn report(&self, date: CalendarDate) -> CountdownReport {
        CountdownReport::new(date, &self.status(date))
    }

    /// Grouped holiday periods of a year
    pub fn periods(&self, year: i32) -> Vec<HolidayPeriod> {
        holiday_periods(&self.calendar.holidays(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays::StaticHolidayCalendar;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn span(name: &str, first: CalendarDate, days: u32) -> Vec<HolidayEntry> {
        let mut out = Vec::new();
        let mut d = first;
        for _ in 0..days {
            out.push(HolidayEntry::holiday(d, name));
            d = d.next_day().unwrap();
        }
        out
    }

    fn text(messages: &[StatusMessage]) -> Vec<String> {
        messages.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_weekday_countdown() {
        // 2025-01-06 is a Monday
        for offset in 0..5u32 {
            let d = date(2025, 1, 6 + offset);
            let weekday = d.weekday();
            let messages = compute_status(d, &[]);
            assert_eq!(messages.len(), 1);
            assert_eq!(weekend_proximity(d).days(), 6 - weekday as i32);
            let expected = if weekday == 5 {
                "tomorrow is the weekend".to_string()
            } else {
                format!("distance to weekend: {} days", 6 - weekday)
            };
            assert_eq!(messages[0].to_string(), expected);
        }
    }

    #[test]
    fn test_saturday_and_sunday() {
        assert_eq!(text(&compute_status(date(2025, 3, 15), &[])), vec!["today is the weekend"]);
        assert_eq!(text(&compute_status(date(2025, 3, 16), &[])), vec!["back to work tomorrow"]);
        assert_eq!(weekend_proximity(date(2025, 3, 15)).days(), -1);
        assert_eq!(weekend_proximity(date(2025, 3, 16)).days(), -2);
    }

    #[test]
    fn test_wednesday_with_national_day_ahead() {
        let entries = vec![HolidayEntry::holiday(date(2025, 9, 27), "National Day")];
        let messages = compute_status(date(2025, 9, 17), &entries);
        assert_eq!(
            text(&messages),
            vec!["distance to weekend: 3 days", "10 days until National Day"]
        );
    }

    #[test]
    fn test_middle_day_of_holiday() {
        let entries = span("Qingming Festival", date(2025, 4, 4), 3);
        let messages = compute_status(date(2025, 4, 5), &entries);
        assert_eq!(text(&messages), vec!["Qingming Festival holiday — enjoy the rest"]);
    }

    #[test]
    fn test_last_day_of_holiday() {
        let entries = span("Qingming Festival", date(2025, 4, 4), 3);
        let messages = compute_status(date(2025, 4, 6), &entries);
        assert_eq!(
            text(&messages),
            vec!["last day of Qingming Festival, back to work tomorrow"]
        );
    }

    #[test]
    fn test_last_day_uses_latest_member_regardless_of_order() {
        let mut entries = span("Dragon Boat Festival", date(2025, 5, 31), 3);
        entries.reverse();
        let messages = compute_status(date(2025, 6, 2), &entries);
        assert_eq!(
            messages[0],
            StatusMessage::LastHolidayDay { name: "Dragon Boat Festival".to_string() }
        );
    }

    #[test]
    fn test_only_five_nearest_upcoming() {
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        // Listed out of order on purpose
        let entries: Vec<HolidayEntry> = names
            .iter()
            .enumerate()
            .rev()
            .map(|(i, name)| HolidayEntry::holiday(date(2025, 2, 1 + 3 * i as u32), name))
            .collect();

        let messages = compute_status(date(2025, 1, 20), &entries);
        let upcoming: Vec<_> = messages.iter().filter(|m| m.is_upcoming()).collect();
        assert_eq!(upcoming.len(), UPCOMING_LIMIT);

        let expected: Vec<StatusMessage> = names[..5]
            .iter()
            .enumerate()
            .map(|(i, name)| StatusMessage::Upcoming {
                name: name.to_string(),
                days: 12 + 3 * i as i64,
            })
            .collect();
        assert_eq!(messages[1..].to_vec(), expected);
    }

    #[test]
    fn test_current_holiday_not_listed_as_upcoming() {
        let mut entries = span("Labour Day", date(2025, 5, 1), 3);
        entries.extend(span("Dragon Boat Festival", date(2025, 5, 31), 3));

        let messages = compute_status(date(2025, 5, 2), &entries);
        assert_eq!(
            text(&messages),
            vec![
                "Labour Day holiday — enjoy the rest",
                "29 days until Dragon Boat Festival",
            ]
        );
    }

    #[test]
    fn test_past_holidays_dropped() {
        let entries = vec![
            HolidayEntry::holiday(date(2025, 1, 1), "New Year's Day"),
            HolidayEntry::holiday(date(2025, 12, 25), "Christmas"),
        ];
        let messages = compute_status(date(2025, 7, 2), &entries);
        assert_eq!(
            text(&messages),
            vec!["distance to weekend: 3 days", "176 days until Christmas"]
        );
    }

    #[test]
    fn test_compensatory_workday_is_not_a_holiday() {
        let entries = vec![
            HolidayEntry::workday(date(2025, 4, 27), "Labour Day"),
            HolidayEntry::holiday(date(2025, 5, 1), "Labour Day"),
        ];
        // 2025-04-27 is a Sunday made into a workday
        let messages = compute_status(date(2025, 4, 27), &entries);
        assert_eq!(
            text(&messages),
            vec!["back to work tomorrow", "4 days until Labour Day"]
        );

        let periods = holiday_periods(&entries);
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].earliest_date(), date(2025, 5, 1));
    }

    #[test]
    fn test_mid_autumn_inside_national_day_week() {
        // Oct 6 belongs to Mid-Autumn, which splits the National Day entries
        let engine = HolidayCountdownEngine::new(Arc::new(StaticHolidayCalendar::builtin()));

        assert_eq!(
            engine.messages(date(2025, 10, 6)),
            vec!["last day of Mid-Autumn Festival, back to work tomorrow"]
        );
        assert_eq!(
            engine.messages(date(2025, 10, 5)),
            vec![
                "National Day holiday — enjoy the rest",
                "1 days until Mid-Autumn Festival",
            ]
        );
        assert_eq!(
            engine.messages(date(2025, 10, 8)),
            vec!["last day of National Day, back to work tomorrow"]
        );
    }

    #[test]
    fn test_day_without_entry_inside_range() {
        // Jan 29 sits between two entries of the same holiday
        let entries = vec![
            HolidayEntry::holiday(date(2025, 1, 28), "Spring Festival"),
            HolidayEntry::holiday(date(2025, 1, 30), "Spring Festival"),
        ];
        let messages = compute_status(date(2025, 1, 29), &entries);
        assert_eq!(text(&messages), vec!["distance to weekend: 3 days"]);
    }

    #[test]
    fn test_same_start_day_ordered_by_name() {
        let mut entries = span("National Day", date(2025, 10, 1), 3);
        entries.push(HolidayEntry::holiday(date(2025, 10, 1), "Mid-Autumn Festival"));

        let names: Vec<String> = holiday_periods(&entries)
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Mid-Autumn Festival", "National Day"]);

        // 2025-09-29 is a Monday
        assert_eq!(
            text(&compute_status(date(2025, 9, 29), &entries)),
            vec![
                "distance to weekend: 5 days",
                "2 days until Mid-Autumn Festival",
                "2 days until National Day",
            ]
        );
    }

    #[test]
    fn test_empty_year() {
        let engine = HolidayCountdownEngine::new(Arc::new(StaticHolidayCalendar::builtin()));
        // 2024-07-03 is a Wednesday and the built-in table has no 2024 data
        assert_eq!(engine.messages(date(2024, 7, 3)), vec!["distance to weekend: 3 days"]);
    }

    #[test]
    fn test_builtin_new_years_day() {
        let engine = HolidayCountdownEngine::new(Arc::new(StaticHolidayCalendar::builtin()));
        assert_eq!(
            engine.messages(date(2025, 1, 1)),
            vec![
                "last day of New Year's Day, back to work tomorrow",
                "27 days until Spring Festival",
                "93 days until Qingming Festival",
                "120 days until Labour Day",
                "150 days until Dragon Boat Festival",
                "273 days until National Day",
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let engine = HolidayCountdownEngine::new(Arc::new(StaticHolidayCalendar::builtin()));
        let d = date(2025, 9, 17);
        assert_eq!(engine.status(d), engine.status(d));
        assert_eq!(engine.report(d), engine.report(d));
    }

    #[test]
    fn test_periods_sorted_by_first_day() {
        let engine = HolidayCountdownEngine::new(Arc::new(StaticHolidayCalendar::builtin()));
        let names: Vec<String> = engine
            .periods(2025)
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "New Year's Day",
                "Spring Festival",
                "Qingming Festival",
                "Labour Day",
                "Dragon Boat Festival",
                "National Day",
                "Mid-Autumn Festival",
            ]
        );
    }
}
