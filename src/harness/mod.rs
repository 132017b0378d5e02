//! Conformance harness for [`Adder`] realizations.
//!
//! The harness owns a fixed, ordered list of [`TestCase`]s built by
//! [`cases`] and runs it against any realization in two stages:
//!
//! 1. **Sanity**: every [`Category::Basic`] case is a plain assertion.
//!    The first mismatch ends the run with [`HarnessError::SanityCheck`];
//!    nothing after it is attempted.
//! 2. **Recorded**: [`Category::Boundary`] then [`Category::Security`].
//!    Each mismatch is recorded in the [`RunReport`] and the run carries on,
//!    so every case gets attempted.
//!
//! Cases are evaluated exactly once, in declaration order, on the calling
//! thread.

#[cfg(test)]
mod tests;

mod parity;
mod recorder;
mod report;

pub use parity::{Mismatch, ParityReport, check_parity};
pub use recorder::{Failure, Recorder};
pub use report::RunReport;

use std::fmt;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::adder::{Adder, SENTINEL, classify};

// ------------------------------------------------------------------------------------------------
// Error type
// ------------------------------------------------------------------------------------------------

/// Errors returned by the harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A basic case failed; the run was aborted.
    #[error("sanity check failed: {0}")]
    SanityCheck(Failure),

    /// Invalid configuration parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

// ------------------------------------------------------------------------------------------------
// Test cases
// ------------------------------------------------------------------------------------------------

/// Tier a case belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Small magnitudes: ordinary sums, zero identity, sign cancellation.
    Basic,
    /// Operands at or next to the 32-bit and 64-bit signed limits.
    Boundary,
    /// Operand pairs that maximise the overflow magnitude.
    Security,
}

impl Category {
    /// All categories in execution order.
    pub const ALL: [Category; 3] = [Category::Basic, Category::Boundary, Category::Security];

    /// Returns `true` if a mismatch in this tier aborts the run.
    pub fn is_fatal(self) -> bool {
        matches!(self, Category::Basic)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Basic => "Basic",
            Category::Boundary => "Boundary",
            Category::Security => "Security",
        };
        f.write_str(name)
    }
}

/// One operand pair with its expected result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// Left operand.
    pub first: i64,
    /// Right operand.
    pub second: i64,
    /// Expected return value.
    pub expected: i64,
    /// Tier the case belongs to.
    pub category: Category,
    /// Short human-readable description.
    pub label: &'static str,
}

impl TestCase {
    const fn new(
        category: Category,
        label: &'static str,
        first: i64,
        second: i64,
        expected: i64,
    ) -> Self {
        Self {
            first,
            second,
            expected,
            category,
            label,
        }
    }
}

/// Builds the full case list in execution order.
pub fn cases() -> Vec<TestCase> {
    use Category::{Basic, Boundary, Security};

    vec![
        // Basic
        TestCase::new(Basic, "simple sum", 5, 10, 15),
        TestCase::new(Basic, "zero plus zero", 0, 0, 0),
        TestCase::new(Basic, "sign cancellation", -5, 5, 0),
        TestCase::new(Basic, "two negatives", -10, -20, -30),
        TestCase::new(Basic, "one plus one", 1, 1, 2),
        TestCase::new(Basic, "hundreds", 100, 200, 300),
        TestCase::new(Basic, "zero identity", 0, 100, 100),
        TestCase::new(Basic, "larger cancellation", -50, 50, 0),
        TestCase::new(Basic, "negative hundreds", -100, -100, -200),
        // Boundary
        TestCase::new(
            Boundary,
            "past i32::MAX",
            i32::MAX as i64,
            1,
            i32::MAX as i64 + 1,
        ),
        TestCase::new(
            Boundary,
            "past i32::MIN",
            i32::MIN as i64,
            -1,
            i32::MIN as i64 - 1,
        ),
        TestCase::new(Boundary, "i64::MAX overflow", i64::MAX, 1, SENTINEL),
        TestCase::new(Boundary, "i64::MIN underflow", i64::MIN, -1, SENTINEL),
        // Security
        TestCase::new(Security, "max plus max", i64::MAX, i64::MAX, SENTINEL),
        TestCase::new(Security, "min plus min", i64::MIN, i64::MIN, SENTINEL),
    ]
}

// ------------------------------------------------------------------------------------------------
// Runner
// ------------------------------------------------------------------------------------------------

/// Runs a case list against an [`Adder`].
#[derive(Debug, Clone)]
pub struct Harness {
    cases: Vec<TestCase>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// Creates a harness over [`cases`].
    pub fn new() -> Self {
        Self::with_cases(cases())
    }

    /// Creates a harness over a custom case list. Order is preserved.
    pub fn with_cases(cases: Vec<TestCase>) -> Self {
        Self { cases }
    }

    /// The cases this harness runs, in order.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Cases of a single category, in order.
    pub fn cases_in(&self, category: Category) -> impl Iterator<Item = &TestCase> {
        self.cases.iter().filter(move |case| case.category == category)
    }

    /// Runs the sanity stage followed by the recorded stage.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::SanityCheck`] on the first basic mismatch.
    pub fn run(&self, adder: &dyn Adder) -> Result<RunReport, HarnessError> {
        let sanity = self.run_sanity(adder)?;
        let mut report = self.run_recorded(adder);
        report.executed += sanity;
        Ok(report)
    }

    /// Runs every fatal-tier case as a plain assertion.
    ///
    /// Returns the number of cases executed.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::SanityCheck`] on the first mismatch.
    pub fn run_sanity(&self, adder: &dyn Adder) -> Result<usize, HarnessError> {
        let mut executed = 0;

        for case in self.cases.iter().filter(|case| case.category.is_fatal()) {
            let actual = adder.add(case.first, case.second);
            executed += 1;

            if actual != case.expected {
                let failure = Failure::from_case(case, actual);
                error!(realization = adder.name(), %failure, "sanity check failed");
                return Err(HarnessError::SanityCheck(failure));
            }
            debug!(
                realization = adder.name(),
                label = case.label,
                first = case.first,
                second = case.second,
                actual,
                "sanity case passed"
            );
        }

        info!(realization = adder.name(), executed, "sanity stage passed");
        Ok(executed)
    }

    /// Runs every non-fatal case, recording each mismatch.
    pub fn run_recorded(&self, adder: &dyn Adder) -> RunReport {
        let mut recorder = Recorder::new();

        for category in Category::ALL.into_iter().filter(|c| !c.is_fatal()) {
            for case in self.cases_in(category) {
                let actual = adder.add(case.first, case.second);
                if let Err(err) = classify(case.first, case.second) {
                    debug!(
                        realization = adder.name(),
                        label = case.label,
                        %err,
                        actual,
                        "overflow case"
                    );
                }
                recorder.check_case(case, actual);
            }
        }

        let report = recorder.finish(adder.name());
        info!(
            realization = adder.name(),
            executed = report.executed,
            failed = report.failed(),
            "recorded stage finished"
        );
        report
    }
}
