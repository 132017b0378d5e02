//! Externally supplied realization.
//!
//! Compiled only with the `external` cargo feature. The crate then binds
//!
//! ```c
//! int64_t register_adder(int64_t first, int64_t second);
//! ```
//!
//! through the platform C calling convention.
//!
//! On x86-64 and AArch64 Unix targets the definition comes by default from
//! the standalone sources in `asm/`, assembled into this crate as a *weak*
//! symbol. Any strong `register_adder` in the final link replaces it, so a
//! separately built object can be tested without touching the crate:
//!
//! ```bash
//! as my_register_adder.s -o my_register_adder.o
//! RUSTFLAGS="-C link-arg=$PWD/my_register_adder.o" \
//!     cargo run --features external --bin register-adder-conformance
//! ```
//!
//! On other targets there is no bundled definition and the object must be
//! supplied this way.
//!
//! The symbol is trusted to honour the contract in [`super`]; the harness
//! is what verifies that it does.

use super::Adder;

#[cfg(all(unix, not(target_vendor = "apple"), target_arch = "x86_64"))]
std::arch::global_asm!(
    include_str!("../../asm/register_adder_x86_64.s"),
    options(att_syntax)
);

#[cfg(all(unix, not(target_vendor = "apple"), target_arch = "aarch64"))]
std::arch::global_asm!(include_str!("../../asm/register_adder_aarch64.s"));

unsafe extern "C" {
    fn register_adder(first: i64, second: i64) -> i64;
}

/// Binds the externally linked `register_adder` symbol.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExternAdder;

impl Adder for ExternAdder {
    fn add(&self, first: i64, second: i64) -> i64 {
        // SAFETY: the linked symbol is required to take two `i64` values by
        // value, return one, and have no other effects.
        unsafe { register_adder(first, second) }
    }

    fn name(&self) -> &'static str {
        "external"
    }
}
