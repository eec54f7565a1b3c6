//! Validation report containing every notice from a run.

use std::collections::BTreeMap;

use gtfs_model::{Notice, NoticeCode, Severity};
use serde::{Deserialize, Serialize};

/// Notices collected over one validation run, in append order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub notices: Vec<Notice>,
}

impl ValidationReport {
    pub fn new(notices: Vec<Notice>) -> Self {
        Self { notices }
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of notices per code.
    pub fn count_by_code(&self) -> BTreeMap<NoticeCode, usize> {
        let mut counts = BTreeMap::new();
        for notice in &self.notices {
            *counts.entry(notice.code()).or_insert(0) += 1;
        }
        counts
    }

    /// Notices ordered Error, Warning, Info; append order kept within a level.
    pub fn sorted_by_severity(&self) -> Vec<&Notice> {
        let mut notices: Vec<_> = self.notices.iter().collect();
        notices.sort_by_key(|notice| notice.severity());
        notices
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.notices
            .iter()
            .filter(|notice| notice.severity() == severity)
            .count()
    }
}
