//! Feed validity window checks (E038, W009).
//!
//! A feed whose `feed_end_date` falls before `today + N days` does not cover
//! the upcoming service period. Records without an end date are skipped.

use chrono::{Days, NaiveDate};
use gtfs_model::{Notice, NoticeCode};

use crate::rule::{ValidationContext, ValidationRule};

/// Flags feeds that stop being valid within the next `days` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedCoversNextDays {
    code: NoticeCode,
    days: u64,
}

impl FeedCoversNextDays {
    /// E038: dataset should be valid for at least the next 7 days.
    pub const fn next_7_days() -> Self {
        Self {
            code: NoticeCode::E038,
            days: 7,
        }
    }

    /// W009: dataset should cover at least the next 30 days of service.
    pub const fn next_30_days() -> Self {
        Self {
            code: NoticeCode::W009,
            days: 30,
        }
    }

    /// First date a compliant feed must still cover.
    pub fn threshold(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(self.days))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl ValidationRule for FeedCoversNextDays {
    fn code(&self) -> NoticeCode {
        self.code
    }

    fn validate(&self, ctx: &ValidationContext<'_>) {
        let today = ctx.clock.today();
        let threshold = self.threshold(today);

        for (publisher_name, feed_info) in ctx.repository.feed_info_all() {
            let Some(end_date) = feed_info.end_date else {
                continue;
            };
            if end_date >= threshold {
                continue;
            }

            ctx.results.add_notice(Notice::feed_expiry(
                self.code,
                today,
                end_date,
                feed_info.composite_key(publisher_name),
            ));
        }
    }
}
