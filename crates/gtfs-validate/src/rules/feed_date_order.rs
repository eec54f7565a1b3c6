//! Feed start/end date ordering (E037).

use gtfs_model::{Notice, NoticeCode};

use crate::rule::{ValidationContext, ValidationRule};

/// Flags feeds whose `feed_start_date` is after their `feed_end_date`.
///
/// Only records declaring both dates are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStartDateBeforeEndDate;

impl ValidationRule for FeedStartDateBeforeEndDate {
    fn code(&self) -> NoticeCode {
        NoticeCode::E037
    }

    fn validate(&self, ctx: &ValidationContext<'_>) {
        for (publisher_name, feed_info) in ctx.repository.feed_info_all() {
            let (Some(start_date), Some(end_date)) = (feed_info.start_date, feed_info.end_date)
            else {
                continue;
            };
            if start_date <= end_date {
                continue;
            }

            ctx.results.add_notice(Notice::feed_date_order(
                start_date,
                end_date,
                feed_info.composite_key(publisher_name),
            ));
        }
    }
}
