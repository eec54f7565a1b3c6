//! Read-only access to parsed feed data.

use std::collections::BTreeMap;

use gtfs_model::FeedInfo;

/// Parsed feed records exposed to validation rules.
///
/// Populated once before validation starts and shared read-only by every
/// rule afterwards.
pub trait GtfsDataRepository: Send + Sync {
    /// All `feed_info.txt` records keyed by publisher name.
    fn feed_info_all(&self) -> &BTreeMap<String, FeedInfo>;
}

/// Repository backed by in-memory maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGtfsData {
    feed_info: BTreeMap<String, FeedInfo>,
}

impl InMemoryGtfsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a feed info record under its publisher name.
    ///
    /// Returns the record previously registered under that name, if any.
    pub fn insert_feed_info(&mut self, feed_info: FeedInfo) -> Option<FeedInfo> {
        self.feed_info
            .insert(feed_info.publisher_name.clone(), feed_info)
    }

    /// Register a feed info record under an explicit key.
    pub fn insert_feed_info_as(
        &mut self,
        publisher_name: impl Into<String>,
        feed_info: FeedInfo,
    ) -> Option<FeedInfo> {
        self.feed_info.insert(publisher_name.into(), feed_info)
    }

    pub fn is_empty(&self) -> bool {
        self.feed_info.is_empty()
    }
}

impl GtfsDataRepository for InMemoryGtfsData {
    fn feed_info_all(&self) -> &BTreeMap<String, FeedInfo> {
        &self.feed_info
    }
}

impl FromIterator<FeedInfo> for InMemoryGtfsData {
    fn from_iter<I: IntoIterator<Item = FeedInfo>>(iter: I) -> Self {
        let mut data = Self::new();
        for feed_info in iter {
            data.insert_feed_info(feed_info);
        }
        data
    }
}
