//! Runs a set of rules against one validation context.

use std::collections::BTreeSet;
use std::thread;

use gtfs_model::NoticeCode;

use crate::rule::{ValidationContext, ValidationRule};
use crate::rules::default_rules;

/// Runner configuration.
#[derive(Debug, Clone, Default)]
pub struct RunnerOptions {
    /// Execute rules concurrently on scoped threads.
    pub parallel: bool,
    /// Codes whose rules are not executed.
    pub excluded_codes: BTreeSet<NoticeCode>,
}

impl RunnerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn exclude(mut self, code: NoticeCode) -> Self {
        self.excluded_codes.insert(code);
        self
    }
}

/// Invokes each configured rule exactly once per run.
pub struct RuleRunner {
    rules: Vec<Box<dyn ValidationRule>>,
    options: RunnerOptions,
}

impl RuleRunner {
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self {
            rules,
            options: RunnerOptions::default(),
        }
    }

    /// Runner over the bundled catalog.
    pub fn with_default_rules() -> Self {
        Self::new(default_rules())
    }

    #[must_use]
    pub fn with_options(mut self, options: RunnerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Codes of the rules a run will execute, in catalog order.
    pub fn active_codes(&self) -> Vec<NoticeCode> {
        self.rules
            .iter()
            .map(|rule| rule.code())
            .filter(|code| !self.options.excluded_codes.contains(code))
            .collect()
    }

    /// Execute every active rule. Returns the number of rules executed.
    pub fn run(&self, ctx: &ValidationContext<'_>) -> usize {
        let active: Vec<&dyn ValidationRule> = self
            .rules
            .iter()
            .map(Box::as_ref)
            .filter(|rule| {
                let excluded = self.options.excluded_codes.contains(&rule.code());
                if excluded {
                    tracing::debug!(rule = rule.code().as_str(), "rule excluded, skipping");
                }
                !excluded
            })
            .collect();

        if self.options.parallel && active.len() > 1 {
            thread::scope(|scope| {
                for &rule in &active {
                    scope.spawn(move || rule.execute(ctx));
                }
            });
        } else {
            for rule in &active {
                rule.execute(ctx);
            }
        }

        tracing::info!(
            rules = active.len(),
            parallel = self.options.parallel,
            "validation run complete"
        );
        active.len()
    }
}

impl Default for RuleRunner {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

impl std::fmt::Debug for RuleRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let codes: Vec<NoticeCode> = self.rules.iter().map(|rule| rule.code()).collect();
        f.debug_struct("RuleRunner")
            .field("rules", &codes)
            .field("options", &self.options)
            .finish()
    }
}
