//! GTFS feed records and the validation notice model.
//!
//! - [`FeedInfo`]: parsed `feed_info.txt` record
//! - [`Notice`]: one reported violation, keyed by [`NoticeKey`]
//! - [`NoticeCode`]: the catalog of rule codes and their severities

mod code;
mod error;
mod feed_info;
mod notice;

pub use code::{NoticeCode, Severity};
pub use error::{ModelError, Result};
pub use feed_info::{
    FEED_END_DATE, FEED_INFO_FILE, FEED_LANG, FEED_PUBLISHER_NAME, FEED_PUBLISHER_URL,
    FEED_START_DATE, FeedInfo,
};
pub use notice::{CompositeKey, Notice, NoticeKey, NoticeValue};
