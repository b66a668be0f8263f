/// Holiday data loading from JSON and CSV files
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::calendar::StaticHolidayCalendar;
use crate::error::{CountdownError, Result};
use crate::types::HolidayEntry;

impl StaticHolidayCalendar {
    /// Parse a JSON array of holiday entries
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<HolidayEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Parse CSV with a `date,name,is_compensatory_workday` header
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for record in rdr.deserialize() {
            let entry: HolidayEntry = record?;
            entries.push(entry);
        }

        Ok(Self::from_entries(entries))
    }

    /// Load a holiday file, picking the parser from its extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CountdownError::FileNotFound(path.display().to_string()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let calendar = match extension.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?)?,
            other => {
                return Err(CountdownError::UnsupportedFormat(format!(
                    "{} (extension '{}')",
                    path.display(),
                    other
                )))
            }
        };

        info!(
            "📂 Loaded {} holiday entries for years {:?} from {}",
            calendar.len(),
            calendar.years(),
            path.display()
        );
        Ok(calendar)
    }
}
