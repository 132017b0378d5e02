//! Randomized parity between realizations.
//!
//! Coverage:
//! - reference against itself and every linked realization: no mismatches
//! - a wrapping adder is caught, with a bounded mismatch list
//! - the same seed compares the same pairs
//! - zero iterations compares nothing

#[cfg(test)]
mod tests {
    use crate::adder::{Adder, ReferenceAdder, SENTINEL, linked_adders};
    use crate::harness::check_parity;
    use crate::harness::tests::helpers::{RecordingAdder, WrappingAdder, init_tracing};

    #[test]
    fn reference_agrees_with_itself() {
        init_tracing();

        let report = check_parity(&ReferenceAdder, &ReferenceAdder, 1_000, 7);
        assert!(report.is_success());
        assert_eq!(report.compared, 2_000);
        assert!(report.mismatches.is_empty());
    }

    #[test]
    fn linked_realizations_agree_with_reference() {
        init_tracing();

        for adder in linked_adders() {
            let report = check_parity(adder.as_ref(), &ReferenceAdder, 5_000, 0xADD);
            assert!(report.is_success(), "{report}");
            assert_eq!(report.realization, adder.name());
        }
    }

    /// # Scenario
    /// A wrapping adder disagrees whenever the true sum leaves the range.
    ///
    /// # Expected behavior
    /// Mismatches are found, each one a pair the reference rejects, and
    /// the kept list is capped while the count stays exact.
    #[test]
    fn wrapping_adder_is_caught() {
        init_tracing();

        let report = check_parity(&WrappingAdder, &ReferenceAdder, 2_000, 11);

        assert!(!report.is_success());
        assert!(report.mismatch_count > report.mismatches.len());
        assert_eq!(report.mismatches.len(), 16);
        for mismatch in &report.mismatches {
            assert_eq!(mismatch.reference, SENTINEL);
            assert_eq!(
                mismatch.candidate,
                mismatch.first.wrapping_add(mismatch.second)
            );
        }
    }

    #[test]
    fn same_seed_compares_same_pairs() {
        let first = RecordingAdder::default();
        let second = RecordingAdder::default();

        check_parity(&first, &ReferenceAdder, 200, 42);
        check_parity(&second, &ReferenceAdder, 200, 42);

        assert_eq!(*first.calls.borrow(), *second.calls.borrow());
        assert_eq!(first.calls.borrow().len(), 400);
    }

    /// # Scenario
    /// Every drawn pair is also compared with its operands swapped.
    #[test]
    fn pairs_are_checked_in_both_orders() {
        let adder = RecordingAdder::default();
        check_parity(&adder, &ReferenceAdder, 50, 3);

        let calls = adder.calls.borrow();
        for pair in calls.chunks(2) {
            assert_eq!(pair[0], (pair[1].1, pair[1].0));
        }
    }

    #[test]
    fn draws_hit_the_limits() {
        let adder = RecordingAdder::default();
        check_parity(&adder, &ReferenceAdder, 2_000, 5);

        let calls = adder.calls.borrow();
        assert!(calls.iter().any(|&(a, _)| a == i64::MAX));
        assert!(calls.iter().any(|&(a, _)| a == i64::MIN));
        assert!(calls.iter().any(|&(a, b)| ReferenceAdder.add(a, b) == SENTINEL));
    }

    #[test]
    fn zero_iterations_compares_nothing() {
        let report = check_parity(&WrappingAdder, &ReferenceAdder, 0, 1);
        assert_eq!(report.compared, 0);
        assert!(report.is_success());
        assert_eq!(report.to_string(), "[wrapping] parity: compared 0, mismatches 0");
    }

    /// # Scenario
    /// A wrapping adder disagrees on hundreds of random pairs.
    ///
    /// # Expected behavior
    /// The check adds exactly one failed case to a run total, and zero when
    /// the realizations agree.
    #[test]
    fn failed_parity_counts_as_one_case() {
        let report = check_parity(&WrappingAdder, &ReferenceAdder, 2_000, 11);
        assert!(report.mismatch_count > 1);
        assert_eq!(report.failed(), 1);

        let report = check_parity(&ReferenceAdder, &ReferenceAdder, 2_000, 11);
        assert_eq!(report.failed(), 0);
    }
}
