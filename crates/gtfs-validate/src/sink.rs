//! Append-only collection of notices.

use std::sync::{Mutex, MutexGuard, PoisonError};

use gtfs_model::Notice;

use crate::report::ValidationReport;

/// Receives notices produced by rules.
///
/// Implementations must accept every notice, keep duplicates, and be safe to
/// call from several rules running at once.
pub trait ValidationResultSink: Send + Sync {
    fn add_notice(&self, notice: Notice);
}

/// Sink that keeps notices in memory in append order.
#[derive(Debug, Default)]
pub struct InMemoryValidationResults {
    notices: Mutex<Vec<Notice>>,
}

impl InMemoryValidationResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of the notices appended so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.lock().clone()
    }

    pub fn into_report(self) -> ValidationReport {
        let notices = self
            .notices
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        ValidationReport::new(notices)
    }

    // A panicking rule cannot leave a half-written Vec behind, so a poisoned
    // lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<Notice>> {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ValidationResultSink for InMemoryValidationResults {
    fn add_notice(&self, notice: Notice) {
        self.lock().push(notice);
    }
}
