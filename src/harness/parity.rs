//! Randomized agreement check between two realizations.
//!
//! Operands are drawn from a seeded [`StdRng`], so a given
//! `(iterations, seed)` pair always compares the same pairs. A quarter of
//! the draws come from [`EDGE_OPERANDS`] to keep the overflow boundaries
//! well covered; the rest are uniform over the whole `i64` range.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::adder::Adder;

/// Upper bound on mismatches kept in a [`ParityReport`]; the count is exact.
const MAX_KEPT_MISMATCHES: usize = 16;

/// Probability that an operand is drawn from [`EDGE_OPERANDS`].
const EDGE_BIAS: f64 = 0.25;

/// Operands sitting on or next to a 32-bit or 64-bit limit.
const EDGE_OPERANDS: [i64; 13] = [
    i64::MIN,
    i64::MIN + 1,
    i32::MIN as i64 - 1,
    i32::MIN as i64,
    -1,
    0,
    1,
    i32::MAX as i64,
    i32::MAX as i64 + 1,
    i64::MAX - 1,
    i64::MAX,
    i64::MAX / 2,
    i64::MIN / 2,
];

/// One operand pair on which the realizations disagreed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Left operand.
    pub first: i64,
    /// Right operand.
    pub second: i64,
    /// Result from the candidate.
    pub candidate: i64,
    /// Result from the reference.
    pub reference: i64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "add({}, {}): candidate {} != reference {}",
            self.first, self.second, self.candidate, self.reference
        )
    }
}

/// Outcome of [`check_parity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityReport {
    /// Name of the candidate realization.
    pub realization: &'static str,
    /// Operand pairs compared.
    pub compared: usize,
    /// Total number of disagreements.
    pub mismatch_count: usize,
    /// The first disagreements, at most [`MAX_KEPT_MISMATCHES`].
    pub mismatches: Vec<Mismatch>,
}

impl ParityReport {
    /// Returns `true` if the realizations agreed on every pair.
    pub fn is_success(&self) -> bool {
        self.mismatch_count == 0
    }

    /// Failed cases this check contributes to a run total: one if any pair
    /// disagreed, however many did.
    pub fn failed(&self) -> usize {
        usize::from(!self.is_success())
    }
}

impl fmt::Display for ParityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] parity: compared {}, mismatches {}",
            self.realization, self.compared, self.mismatch_count
        )?;
        for mismatch in &self.mismatches {
            write!(f, "\n  {mismatch}")?;
        }
        Ok(())
    }
}

/// Compares `candidate` against `reference` on `iterations` operand pairs.
///
/// Each pair is also checked in swapped order, so commutativity
/// differences surface as mismatches too.
pub fn check_parity(
    candidate: &dyn Adder,
    reference: &dyn Adder,
    iterations: usize,
    seed: u64,
) -> ParityReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = ParityReport {
        realization: candidate.name(),
        compared: 0,
        mismatch_count: 0,
        mismatches: Vec::new(),
    };

    for _ in 0..iterations {
        let first = draw_operand(&mut rng);
        let second = draw_operand(&mut rng);

        for (a, b) in [(first, second), (second, first)] {
            report.compared += 1;
            let got = candidate.add(a, b);
            let want = reference.add(a, b);
            if got == want {
                continue;
            }

            let mismatch = Mismatch {
                first: a,
                second: b,
                candidate: got,
                reference: want,
            };
            warn!(realization = candidate.name(), %mismatch, "parity mismatch");
            report.mismatch_count += 1;
            if report.mismatches.len() < MAX_KEPT_MISMATCHES {
                report.mismatches.push(mismatch);
            }
        }
    }

    info!(
        realization = candidate.name(),
        reference = reference.name(),
        compared = report.compared,
        mismatches = report.mismatch_count,
        seed,
        "parity check finished"
    );
    report
}

fn draw_operand(rng: &mut impl Rng) -> i64 {
    if rng.random_bool(EDGE_BIAS) {
        EDGE_OPERANDS[rng.random_range(0..EDGE_OPERANDS.len())]
    } else {
        rng.random()
    }
}
