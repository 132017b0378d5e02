//! Aggregated result of one harness run.

use std::fmt;

use super::{Category, Failure};

/// Outcome of running the harness against one realization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Name of the realization under test.
    pub realization: &'static str,
    /// Number of cases executed.
    pub executed: usize,
    /// Every recorded failure, in execution order.
    pub failures: Vec<Failure>,
}

impl RunReport {
    /// Number of failed cases.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Number of passed cases.
    pub fn passed(&self) -> usize {
        self.executed.saturating_sub(self.failed())
    }

    /// Returns `true` if nothing failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures belonging to `category`.
    pub fn failures_in(&self, category: Category) -> impl Iterator<Item = &Failure> {
        self.failures
            .iter()
            .filter(move |failure| failure.category == Some(category))
    }

    /// Whole-number pass percentage; an empty run counts as 100%.
    pub fn pass_percent(&self) -> usize {
        if self.executed == 0 {
            return 100;
        }
        self.passed() * 100 / self.executed
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}%: Checks: {}, Failures: {}",
            self.realization,
            self.pass_percent(),
            self.executed,
            self.failed()
        )?;
        for failure in &self.failures {
            write!(f, "\n  {failure}")?;
        }
        Ok(())
    }
}
