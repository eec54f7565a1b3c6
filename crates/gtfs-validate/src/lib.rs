//! Rule-based validation of GTFS feed data.
//!
//! Rules read parsed records from a [`GtfsDataRepository`], judge them and
//! append [`Notice`](gtfs_model::Notice)s to a [`ValidationResultSink`]. Every
//! rule implements [`ValidationRule`], so the [`RuleRunner`] can drive the
//! whole catalog uniformly.
//!
//! # Example
//!
//! ```ignore
//! use gtfs_validate::{
//!     InMemoryGtfsData, InMemoryValidationResults, RuleRunner, SystemClock, ValidationContext,
//! };
//!
//! let data = InMemoryGtfsData::new();
//! let results = InMemoryValidationResults::new();
//! let ctx = ValidationContext::new(&data, &results, &SystemClock);
//!
//! RuleRunner::with_default_rules().run(&ctx);
//! let report = results.into_report();
//! println!("{} error(s)", report.error_count());
//! ```

mod clock;
mod report;
mod repository;
mod rule;
pub mod rules;
mod runner;
mod sink;

pub use clock::{Clock, FixedClock, SystemClock};
pub use report::ValidationReport;
pub use repository::{GtfsDataRepository, InMemoryGtfsData};
pub use rule::{ValidationContext, ValidationRule};
pub use rules::default_rules;
pub use runner::{RuleRunner, RunnerOptions};
pub use sink::{InMemoryValidationResults, ValidationResultSink};
