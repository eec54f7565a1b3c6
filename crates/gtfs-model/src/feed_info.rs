//! `feed_info.txt` records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::notice::CompositeKey;

/// Source file holding feed metadata.
pub const FEED_INFO_FILE: &str = "feed_info.txt";

pub const FEED_PUBLISHER_NAME: &str = "feed_publisher_name";
pub const FEED_PUBLISHER_URL: &str = "feed_publisher_url";
pub const FEED_LANG: &str = "feed_lang";
pub const FEED_START_DATE: &str = "feed_start_date";
pub const FEED_END_DATE: &str = "feed_end_date";

/// Feed publisher metadata and declared validity window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedInfo {
    /// Full name of the organization that publishes the dataset.
    pub publisher_name: String,
    /// URL of the publishing organization's website.
    pub publisher_url: String,
    /// Default language used for the text in this dataset.
    pub lang: String,
    /// First day of reliable service. Absent when the publisher left it blank.
    pub start_date: Option<NaiveDate>,
    /// Last day of reliable service. Absent when the publisher left it blank.
    pub end_date: Option<NaiveDate>,
    pub version: Option<String>,
}

impl FeedInfo {
    pub fn new(
        publisher_name: impl Into<String>,
        publisher_url: impl Into<String>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            publisher_name: publisher_name.into(),
            publisher_url: publisher_url.into(),
            lang: lang.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Natural key `(feed_publisher_name, feed_publisher_url, feed_lang)`.
    ///
    /// `publisher_name` is the name the record is registered under in the
    /// repository, which may differ from the raw column value.
    pub fn composite_key(&self, publisher_name: &str) -> CompositeKey {
        CompositeKey::new(
            (FEED_PUBLISHER_NAME, publisher_name),
            (FEED_PUBLISHER_URL, self.publisher_url.as_str()),
            (FEED_LANG, self.lang.as_str()),
        )
    }
}

impl fmt::Display for FeedInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.publisher_name)
    }
}
