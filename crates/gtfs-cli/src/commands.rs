//! Validation command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use gtfs_ingest::load_feed;
use gtfs_validate::{
    Clock, FixedClock, InMemoryValidationResults, RuleRunner, RunnerOptions, SystemClock,
    ValidationContext, ValidationReport,
};

/// Inputs for one validation run.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    pub feed_dir: PathBuf,
    /// Pin the reference date instead of using the host clock.
    pub today: Option<NaiveDate>,
    pub runner: RunnerOptions,
}

impl ValidateOptions {
    pub fn new(feed_dir: impl Into<PathBuf>) -> Self {
        Self {
            feed_dir: feed_dir.into(),
            today: None,
            runner: RunnerOptions::default(),
        }
    }
}

/// Load the feed and run the bundled catalog over it.
pub fn run_validation(options: &ValidateOptions) -> Result<ValidationReport> {
    let data = load_feed(&options.feed_dir)
        .with_context(|| format!("failed to load feed {}", options.feed_dir.display()))?;

    let clock: Box<dyn Clock> = match options.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let results = InMemoryValidationResults::new();
    let ctx = ValidationContext::new(&data, &results, clock.as_ref());

    let runner = RuleRunner::with_default_rules().with_options(options.runner.clone());
    runner.run(&ctx);

    let report = results.into_report();
    tracing::info!(
        notices = report.len(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation finished"
    );
    Ok(report)
}
