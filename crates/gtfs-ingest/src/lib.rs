//! GTFS feed ingestion.
//!
//! Reads feed files from a directory and builds the in-memory repository
//! that validation rules read from.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gtfs_ingest::load_feed;
//!
//! let data = load_feed(Path::new("feeds/metro"))?;
//! ```

mod error;
mod feed_info;

use std::path::Path;

use gtfs_model::FEED_INFO_FILE;
use gtfs_validate::InMemoryGtfsData;

pub use error::{IngestError, Result};
pub use feed_info::{read_feed_info, read_feed_info_from};

/// Load a feed directory into an in-memory repository.
///
/// `feed_info.txt` is optional in GTFS; when it is missing the repository
/// simply has no feed info records.
pub fn load_feed(dir: &Path) -> Result<InMemoryGtfsData> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut data = InMemoryGtfsData::new();

    let feed_info_path = dir.join(FEED_INFO_FILE);
    if !feed_info_path.is_file() {
        tracing::info!(dir = %dir.display(), "no {FEED_INFO_FILE} in feed");
        return Ok(data);
    }

    for feed_info in read_feed_info(&feed_info_path)? {
        let name = feed_info.publisher_name.clone();
        if data.insert_feed_info(feed_info).is_some() {
            tracing::warn!(
                publisher = %name,
                "duplicate feed_publisher_name in {FEED_INFO_FILE}, keeping last record"
            );
        }
    }

    Ok(data)
}
