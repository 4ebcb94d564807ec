//! Result types for junit-summary

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome of a single `<testcase>` element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCaseResult {
    pub classname: String,
    pub name: String,
    pub time_s: f64,
    /// Raw `status` attribute, not validated
    pub status: String,
    /// Non-empty `<failure>` texts, in document order
    pub failures: Vec<String>,
    /// Non-empty `<error>` texts, in document order
    pub errors: Vec<String>,
    pub system_out: String,
    pub system_err: String,
}

impl TestCaseResult {
    /// A case counts as failed only if it recorded a non-empty failure or
    /// error message. A `<failure/>` element with blank text is dropped
    /// during parsing and therefore does not mark the case as failed.
    pub fn is_failed(&self) -> bool {
        !self.failures.is_empty() || !self.errors.is_empty()
    }
}

/// Suite-level aggregate counts, as reported by the suites themselves
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub tests: u64,
    pub failures: u64,
    pub errors: u64,
    pub skipped: u64,
    pub time_s: f64,
    pub suites: u64,
}

impl Totals {
    /// Fold one suite's attributes into the running totals.
    ///
    /// Counts saturate at `u64::MAX` rather than overflow.
    pub fn absorb_suite(&mut self, suite: &Totals) {
        self.tests = self.tests.saturating_add(suite.tests);
        self.failures = self.failures.saturating_add(suite.failures);
        self.errors = self.errors.saturating_add(suite.errors);
        self.skipped = self.skipped.saturating_add(suite.skipped);
        self.time_s += suite.time_s;
        self.suites = self.suites.saturating_add(1);
    }
}

/// A parsed report: where it came from, its totals and its cases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub source: PathBuf,
    pub totals: Totals,
    pub cases: Vec<TestCaseResult>,
}

impl Report {
    /// Failed cases in encounter order
    pub fn failed_cases(&self) -> Vec<&TestCaseResult> {
        self.cases.iter().filter(|c| c.is_failed()).collect()
    }

    /// The `top_n` slowest cases, longest first.
    ///
    /// The sort is stable, so cases with equal times keep their
    /// document order.
    pub fn slowest(&self, top_n: usize) -> Vec<&TestCaseResult> {
        let mut sorted: Vec<&TestCaseResult> = self.cases.iter().collect();
        sorted.sort_by(|a, b| b.time_s.total_cmp(&a.time_s));
        sorted.truncate(top_n);
        sorted
    }
}
