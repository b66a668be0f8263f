/// Main entry point for the holiday countdown
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, info};

use holiday_countdown::{
    config::{load_config_or_default, timezone},
    countdown::{CountdownReport, CountdownService, HolidayCountdownEngine},
    error::{CountdownError, Result},
    holidays::{HolidayCalendar, StaticHolidayCalendar},
    time::{Clock, SystemClock},
    utils::init_logging,
    CalendarDate, Config, OutputFormat,
};

/// What the command line asked for
enum Mode {
    Once(Option<CalendarDate>),
    Watch,
}

fn parse_args() -> Result<Mode> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(Mode::Once(None)),
        [flag] if flag == "--watch" => Ok(Mode::Watch),
        [date] => Ok(Mode::Once(Some(CalendarDate::parse(date)?))),
        _ => Err(CountdownError::InvalidParameter(
            "usage: holiday-countdown [YYYY-MM-DD | --watch]".to_string(),
        )),
    }
}

/// Application state
pub struct CountdownApp {
    config: Arc<Config>,
    engine: HolidayCountdownEngine,
    clock: Arc<dyn Clock>,
    shutdown: Arc<RwLock<bool>>,
}

impl CountdownApp {
    pub fn new(config_path: &str) -> Result<Self> {
        let (config, source) = load_config_or_default(config_path)?;
        let config = Arc::new(config);
        init_logging(&config);
        source.log(config_path);

        let calendar: Arc<dyn HolidayCalendar> = match &config.holiday_file {
            Some(path) => Arc::new(StaticHolidayCalendar::load(path)?),
            None => {
                info!("Using built-in holiday calendar");
                Arc::new(StaticHolidayCalendar::builtin())
            }
        };

        let clock = Arc::new(SystemClock::new(timezone(&config)?));

        Ok(CountdownApp {
            engine: HolidayCountdownEngine::new(calendar),
            clock,
            config,
            shutdown: Arc::new(RwLock::new(false)),
        })
    }

    fn print(&self, report: &CountdownReport) -> Result<()> {
        match self.config.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string(report)?),
            OutputFormat::Text => {
                println!("📅 {}", report.date);
                for message in &report.messages {
                    println!("   {}", message);
                }
            }
        }
        Ok(())
    }

    pub fn run_once(&self, date: Option<CalendarDate>) -> Result<()> {
        let date = date.unwrap_or_else(|| self.clock.today());
        self.print(&self.engine.report(date))
    }

    /// Print a new report on every day rollover until Ctrl+C
    pub async fn watch(&self) -> Result<()> {
        self.setup_shutdown_handler();

        let service = Arc::new(CountdownService::new(
            self.engine.clone(),
            Arc::clone(&self.clock),
            Duration::from_secs(self.config.poll_interval_sec),
        ));
        let mut rx = service.subscribe();

        let mut runner = {
            let service = Arc::clone(&service);
            let shutdown = Arc::clone(&self.shutdown);
            tokio::spawn(async move { service.run(shutdown).await })
        };

        loop {
            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let report = rx.borrow_and_update().clone();
                    if let Some(report) = report {
                        self.print(&report)?;
                    }
                }
                joined = &mut runner => {
                    joined.map_err(|e| {
                        CountdownError::Other(format!("Countdown service task failed: {}", e))
                    })?;
                    break;
                }
            }
        }

        Ok(())
    }

    fn setup_shutdown_handler(&self) {
        let shutdown = Arc::clone(&self.shutdown);

        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl+C: {}", e);
                return;
            }
            info!("Ctrl+C received - stopping");
            *shutdown.write().await = true;
        });
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

    let mode = parse_args()?;
    let app = CountdownApp::new(&config_path)?;

    let result = match mode {
        Mode::Once(date) => app.run_once(date),
        Mode::Watch => app.watch().await,
    };

    if let Err(e) = &result {
        error!("Countdown failed: {} ({})", e, e.error_code());
    }
    Ok(result?)
}
