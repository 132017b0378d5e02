//! Overflow-checked signed 64-bit addition.
//!
//! Every realization in this module honours the same calling contract:
//! two `i64` operands passed by value, one `i64` result returned by value,
//! no other observable effect.
//!
//! # Contract
//!
//! | Mathematical sum                      | Returned value |
//! |---------------------------------------|----------------|
//! | within `i64::MIN ..= i64::MAX`        | the exact sum  |
//! | above `i64::MAX` (overflow)           | [`SENTINEL`]   |
//! | below `i64::MIN` (underflow)          | [`SENTINEL`]   |
//!
//! The range check runs *before* the operands are combined:
//!
//! - overflow:  `second > 0 && first > i64::MAX - second`
//! - underflow: `second < 0 && first < i64::MIN - second`
//!
//! Neither subtraction can itself leave the `i64` range, so the rule never
//! depends on inspecting a wrapped result.
//!
//! A true sum of zero and a rejected sum are indistinguishable through
//! [`Adder::add`]. [`classify`] applies the same rule but says which bound
//! was crossed.
//!
//! # Realizations
//!
//! - [`ReferenceAdder`]: pure Rust, always available.
//! - `AsmAdder`: the rule hand-written against the platform C ABI
//!   (x86-64 and AArch64 Unix targets only).
//! - `ExternAdder`: binds an externally linked `register_adder` symbol
//!   (cargo feature `external`).
//!
//! [`linked_adders`] lists whichever of these the current build contains.

#[cfg(test)]
mod tests;

#[cfg(all(
    unix,
    not(target_vendor = "apple"),
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
mod asm;

#[cfg(feature = "external")]
pub mod external;

#[cfg(all(
    unix,
    not(target_vendor = "apple"),
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
pub use asm::AsmAdder;

#[cfg(feature = "external")]
pub use external::ExternAdder;

use thiserror::Error;

/// Value returned in place of a sum that does not fit in an `i64`.
pub const SENTINEL: i64 = 0;

// ------------------------------------------------------------------------------------------------
// Error type
// ------------------------------------------------------------------------------------------------

/// The single failure an addition can have: a sum outside the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdderError {
    /// The mathematical sum exceeds `i64::MAX`.
    #[error("overflow: {first} + {second} exceeds i64::MAX")]
    Overflow {
        /// Left operand.
        first: i64,
        /// Right operand.
        second: i64,
    },

    /// The mathematical sum is below `i64::MIN`.
    #[error("underflow: {first} + {second} is below i64::MIN")]
    Underflow {
        /// Left operand.
        first: i64,
        /// Right operand.
        second: i64,
    },
}

// ------------------------------------------------------------------------------------------------
// Calling contract
// ------------------------------------------------------------------------------------------------

/// A realization of the two-operand adder.
///
/// Implementations must be pure: the same operands always produce the same
/// result, and nothing else is observable.
pub trait Adder {
    /// Adds `first` and `second`, returning [`SENTINEL`] when the sum is
    /// not representable.
    fn add(&self, first: i64, second: i64) -> i64;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;
}

impl<A: Adder + ?Sized> Adder for &A {
    fn add(&self, first: i64, second: i64) -> i64 {
        (**self).add(first, second)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<A: Adder + ?Sized> Adder for Box<A> {
    fn add(&self, first: i64, second: i64) -> i64 {
        (**self).add(first, second)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// ------------------------------------------------------------------------------------------------
// Reference realization
// ------------------------------------------------------------------------------------------------

/// Applies the range check and returns the exact sum, or the bound that was
/// crossed.
pub fn classify(first: i64, second: i64) -> Result<i64, AdderError> {
    if second > 0 && first > i64::MAX - second {
        return Err(AdderError::Overflow { first, second });
    }
    if second < 0 && first < i64::MIN - second {
        return Err(AdderError::Underflow { first, second });
    }
    Ok(first + second)
}

/// Pure-Rust realization, used whenever no other realization is linked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceAdder;

impl Adder for ReferenceAdder {
    #[inline]
    fn add(&self, first: i64, second: i64) -> i64 {
        classify(first, second).unwrap_or(SENTINEL)
    }

    fn name(&self) -> &'static str {
        "reference"
    }
}

/// Free-function form of [`ReferenceAdder::add`].
///
/// ```rust
/// use register_adder::register_adder;
///
/// assert_eq!(register_adder(5, 10), 15);
/// assert_eq!(register_adder(i64::MAX, 1), 0);
/// ```
#[must_use]
pub fn register_adder(first: i64, second: i64) -> i64 {
    ReferenceAdder.add(first, second)
}

// ------------------------------------------------------------------------------------------------
// Build-time selection
// ------------------------------------------------------------------------------------------------

/// Returns every realization compiled into this build, reference first.
pub fn linked_adders() -> Vec<Box<dyn Adder>> {
    #[allow(unused_mut)]
    let mut adders: Vec<Box<dyn Adder>> = vec![Box::new(ReferenceAdder)];

    #[cfg(all(
        unix,
        not(target_vendor = "apple"),
        any(target_arch = "x86_64", target_arch = "aarch64")
    ))]
    adders.push(Box::new(AsmAdder));

    #[cfg(feature = "external")]
    adders.push(Box::new(ExternAdder));

    adders
}
