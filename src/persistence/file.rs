use super::{PersistenceError, PersistenceResult};
use crate::options::{AddDaysOptions, ExcludedDates};
use csv::{ReaderBuilder, Trim};
use std::fs::{self, File};
use std::path::Path;
use tracing::debug;

const DATE_COLUMN: &str = "date";

pub fn save_options_to_json<P: AsRef<Path>>(
    options: &AddDaysOptions,
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, options)?;
    Ok(())
}

pub fn load_options_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<AddDaysOptions> {
    let file = File::open(path)?;
    let options: AddDaysOptions = serde_json::from_reader(file)?;
    Ok(options)
}

/// Reads the `date` column of a CSV file with a header row. Other columns
/// (a holiday name, say) are ignored, as are rows whose date does not parse.
pub fn load_excluded_dates_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<ExcludedDates> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;

    let column = reader
        .headers()?
        .iter()
        .position(|header| header.eq_ignore_ascii_case(DATE_COLUMN))
        .ok_or_else(|| PersistenceError::MissingColumn(DATE_COLUMN.to_string()))?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        values.push(record.get(column).map(str::to_owned));
    }

    let excluded = ExcludedDates::from_values(values);
    debug!(rows = excluded.len(), "loaded excluded dates from csv");
    Ok(excluded)
}

/// Reads a newline-delimited list of dates.
pub fn load_excluded_dates_from_text<P: AsRef<Path>>(path: P) -> PersistenceResult<ExcludedDates> {
    let text = fs::read_to_string(path)?;
    Ok(ExcludedDates::parse_lines(&text))
}
