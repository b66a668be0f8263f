/// List the grouped holiday periods of a year
/// Usage: cargo run --release --bin list_holidays [YEAR]
use chrono::Datelike;
use holiday_countdown::config::{load_config_or_default, timezone};
use holiday_countdown::countdown::holiday_periods;
use holiday_countdown::holidays::{HolidayCalendar, StaticHolidayCalendar};
use holiday_countdown::time::{Clock, SystemClock};
use holiday_countdown::utils::init_logging;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let (config, source) = load_config_or_default(&config_path)?;
    init_logging(&config);
    source.log(&config_path);

    let year = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<i32>()?,
        None => SystemClock::new(timezone(&config)?).today().naive().year(),
    };

    let calendar = match &config.holiday_file {
        Some(path) => StaticHolidayCalendar::load(path)?,
        None => StaticHolidayCalendar::builtin(),
    };

    println!("🗓️  Holidays {}", year);
    println!("==============\n");

    let entries = calendar.holidays(year);
    if entries.is_empty() {
        println!("⚠️  No holiday data for {}", year);
        println!("   Known years: {:?}", calendar.years());
        return Ok(());
    }

    let periods = holiday_periods(&entries);
    for period in &periods {
        println!(
            "   {:<24} {} → {}  ({} day(s))",
            period.name(),
            period.earliest_date(),
            period.latest_date(),
            period.day_count()
        );
    }

    let workdays: Vec<_> = entries.iter().filter(|e| e.is_compensatory_workday).collect();
    if !workdays.is_empty() {
        println!("\n🏢 Compensatory workdays:");
        for entry in workdays {
            println!("   {}  ({})", entry.date, entry.name);
        }
    }

    println!("\nTotal: {} holiday period(s)", periods.len());
    Ok(())
}
