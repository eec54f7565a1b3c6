//! Bundled rule catalog.

mod feed_coverage;
mod feed_date_order;

pub use feed_coverage::FeedCoversNextDays;
pub use feed_date_order::FeedStartDateBeforeEndDate;

use crate::rule::ValidationRule;

/// Every bundled rule, in code order.
pub fn default_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(FeedStartDateBeforeEndDate),
        Box::new(FeedCoversNextDays::next_7_days()),
        Box::new(FeedCoversNextDays::next_30_days()),
    ]
}
