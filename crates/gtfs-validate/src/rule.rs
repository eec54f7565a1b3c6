//! The contract every validation rule implements.

use gtfs_model::NoticeCode;

use crate::clock::Clock;
use crate::repository::GtfsDataRepository;
use crate::sink::ValidationResultSink;

/// Collaborators a rule reads from and reports to during one run.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    pub repository: &'a dyn GtfsDataRepository,
    pub results: &'a dyn ValidationResultSink,
    pub clock: &'a dyn Clock,
}

impl<'a> ValidationContext<'a> {
    pub fn new(
        repository: &'a dyn GtfsDataRepository,
        results: &'a dyn ValidationResultSink,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            repository,
            results,
            clock,
        }
    }
}

/// One independent business check over feed data.
///
/// Rules are stateless: everything they read comes from the context, and
/// their only output is notices appended to `ctx.results`. Absent data and
/// clean records simply produce no notice.
pub trait ValidationRule: Send + Sync {
    /// Code reported on every notice this rule emits.
    fn code(&self) -> NoticeCode;

    fn description(&self) -> &'static str {
        self.code().title()
    }

    /// Rule body. Called once per [`execute`](Self::execute).
    fn validate(&self, ctx: &ValidationContext<'_>);

    /// Announce the rule, then run it.
    fn execute(&self, ctx: &ValidationContext<'_>) {
        let code = self.code();
        tracing::info!(
            rule = code.as_str(),
            "Validating rule '{} - {}'",
            code,
            self.description()
        );
        self.validate(ctx);
    }
}
