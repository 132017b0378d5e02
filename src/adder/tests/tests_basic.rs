//! Reference adder on ordinary operands.
//!
//! Coverage:
//! - small positive, negative and mixed-sign sums
//! - zero on either side
//! - the free-function form matches the trait form

#[cfg(test)]
mod tests {
    use crate::adder::{Adder, ReferenceAdder, register_adder};
    use tracing_subscriber::EnvFilter;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_simple_sums() {
        init_tracing();

        assert_eq!(register_adder(5, 10), 15);
        assert_eq!(register_adder(1, 1), 2);
        assert_eq!(register_adder(100, 200), 300);
    }

    #[test]
    fn test_zero_operands() {
        init_tracing();

        assert_eq!(register_adder(0, 0), 0);
        assert_eq!(register_adder(0, 100), 100);
        assert_eq!(register_adder(100, 0), 100);
        assert_eq!(register_adder(0, -7), -7);
    }

    #[test]
    fn test_sign_cancellation() {
        init_tracing();

        assert_eq!(register_adder(-5, 5), 0);
        assert_eq!(register_adder(-50, 50), 0);
        assert_eq!(register_adder(42, -42), 0);
    }

    #[test]
    fn test_negative_sums() {
        init_tracing();

        assert_eq!(register_adder(-10, -20), -30);
        assert_eq!(register_adder(-100, -100), -200);
        assert_eq!(register_adder(-1, 0), -1);
    }

    /// # Scenario
    /// `register_adder` is a thin wrapper; both forms must agree.
    ///
    /// # Expected behavior
    /// Identical results for a spread of operands, including a rejected sum.
    #[test]
    fn test_free_function_matches_trait() {
        init_tracing();

        let adder = ReferenceAdder;
        for (a, b) in [(3, 4), (-9, 2), (i64::MAX, 1), (0, i64::MIN)] {
            assert_eq!(register_adder(a, b), adder.add(a, b));
        }
        assert_eq!(adder.name(), "reference");
    }

    /// # Scenario
    /// The trait is usable through references and boxes.
    #[test]
    fn test_adder_through_indirection() {
        init_tracing();

        let boxed: Box<dyn Adder> = Box::new(ReferenceAdder);
        let by_ref = &ReferenceAdder;

        assert_eq!(boxed.add(20, 22), 42);
        assert_eq!(by_ref.add(20, 22), 42);
        assert_eq!(boxed.name(), "reference");
    }
}
