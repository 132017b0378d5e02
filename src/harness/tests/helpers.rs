use std::cell::RefCell;

use crate::adder::{Adder, ReferenceAdder};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Wraps on overflow instead of returning the sentinel.
pub struct WrappingAdder;

impl Adder for WrappingAdder {
    fn add(&self, first: i64, second: i64) -> i64 {
        first.wrapping_add(second)
    }

    fn name(&self) -> &'static str {
        "wrapping"
    }
}

/// Checks the range against 32-bit limits, as if the operands were `i32`.
pub struct Narrow32Adder;

impl Adder for Narrow32Adder {
    fn add(&self, first: i64, second: i64) -> i64 {
        match (i32::try_from(first), i32::try_from(second)) {
            (Ok(a), Ok(b)) => a.checked_add(b).map(i64::from).unwrap_or(0),
            _ => 0,
        }
    }

    fn name(&self) -> &'static str {
        "narrow32"
    }
}

/// Off by one on every call.
pub struct OffByOneAdder;

impl Adder for OffByOneAdder {
    fn add(&self, first: i64, second: i64) -> i64 {
        ReferenceAdder.add(first, second).wrapping_add(1)
    }

    fn name(&self) -> &'static str {
        "off-by-one"
    }
}

/// Delegates to the reference and remembers every operand pair it saw.
#[derive(Default)]
pub struct RecordingAdder {
    pub calls: RefCell<Vec<(i64, i64)>>,
}

impl Adder for RecordingAdder {
    fn add(&self, first: i64, second: i64) -> i64 {
        self.calls.borrow_mut().push((first, second));
        ReferenceAdder.add(first, second)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
