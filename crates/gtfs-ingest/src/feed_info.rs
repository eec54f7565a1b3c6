//! `feed_info.txt` reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use gtfs_model::{FEED_END_DATE, FEED_START_DATE, FeedInfo};
use serde::Deserialize;

use crate::error::{IngestError, Result};

/// GTFS date format.
const DATE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Deserialize)]
struct FeedInfoRow {
    feed_publisher_name: String,
    feed_publisher_url: String,
    feed_lang: String,
    #[serde(default)]
    feed_start_date: Option<String>,
    #[serde(default)]
    feed_end_date: Option<String>,
    #[serde(default)]
    feed_version: Option<String>,
}

/// Read every record of a `feed_info.txt` file.
pub fn read_feed_info(path: &Path) -> Result<Vec<FeedInfo>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_feed_info_from(file, path)
}

/// Read `feed_info.txt` records from any reader; `path` is used in errors.
pub fn read_feed_info_from<R: Read>(reader: R, path: &Path) -> Result<Vec<FeedInfo>> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: FeedInfoRow = record.deserialize(Some(&headers)).map_err(csv_error)?;

        records.push(FeedInfo {
            start_date: parse_date(row.feed_start_date.as_deref(), FEED_START_DATE, line, path)?,
            end_date: parse_date(row.feed_end_date.as_deref(), FEED_END_DATE, line, path)?,
            version: row.feed_version.filter(|v| !v.is_empty()),
            publisher_name: row.feed_publisher_name,
            publisher_url: row.feed_publisher_url,
            lang: row.feed_lang,
        });
    }

    tracing::debug!(path = %path.display(), records = records.len(), "read feed_info");
    Ok(records)
}

/// Parse an optional `YYYYMMDD` cell. Blank cells are absent dates.
fn parse_date(
    value: Option<&str>,
    field: &'static str,
    line: u64,
    path: &Path,
) -> Result<Option<NaiveDate>> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if value.len() != 8 {
        return Err(invalid_date(value, field, line, path));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| invalid_date(value, field, line, path))
}

fn invalid_date(value: &str, field: &'static str, line: u64, path: &Path) -> IngestError {
    IngestError::InvalidDate {
        field,
        value: value.to_string(),
        line,
        path: path.to_path_buf(),
    }
}
