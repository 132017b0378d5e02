//! Framework-independent assertion recorder.

use std::fmt;

use tracing::{debug, warn};

use super::{Category, RunReport, TestCase};

/// A recorded mismatch between an expected and an actual value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    /// Description of the failed check.
    pub label: &'static str,
    /// Tier of the failed case, when the check came from a [`TestCase`].
    pub category: Option<Category>,
    /// Operands passed to the adder, when known.
    pub operands: Option<(i64, i64)>,
    /// Value the check required.
    pub expected: i64,
    /// Value the adder returned.
    pub actual: i64,
}

impl Failure {
    pub(crate) fn from_case(case: &TestCase, actual: i64) -> Self {
        Self {
            label: case.label,
            category: Some(case.category),
            operands: Some((case.first, case.second)),
            expected: case.expected,
            actual,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(category) = self.category {
            write!(f, "{category}:")?;
        }
        write!(f, "{}: ", self.label)?;
        match self.operands {
            Some((first, second)) => write!(f, "add({first}, {second}) == {}", self.actual)?,
            None => write!(f, "got {}", self.actual)?,
        }
        write!(f, ", expected {}", self.expected)
    }
}

/// Accumulates checks and their failures.
///
/// A failed check never stops the caller; it is stored and counted.
#[derive(Debug, Default)]
pub struct Recorder {
    executed: usize,
    failures: Vec<Failure>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `actual` against `expected` under `label`.
    ///
    /// Returns `true` if they match.
    pub fn check(&mut self, label: &'static str, expected: i64, actual: i64) -> bool {
        self.record(Failure {
            label,
            category: None,
            operands: None,
            expected,
            actual,
        })
    }

    /// Compares an adder's result against a case's expectation.
    ///
    /// Returns `true` if they match.
    pub fn check_case(&mut self, case: &TestCase, actual: i64) -> bool {
        self.record(Failure::from_case(case, actual))
    }

    /// Number of checks performed so far.
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Number of failed checks so far.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Failures recorded so far, in order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Consumes the recorder into a report for `realization`.
    pub fn finish(self, realization: &'static str) -> RunReport {
        RunReport {
            realization,
            executed: self.executed,
            failures: self.failures,
        }
    }

    fn record(&mut self, candidate: Failure) -> bool {
        self.executed += 1;
        if candidate.expected == candidate.actual {
            debug!(label = candidate.label, actual = candidate.actual, "check passed");
            return true;
        }
        warn!(failure = %candidate, "check failed");
        self.failures.push(candidate);
        false
    }
}
