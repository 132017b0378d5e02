//! # register-adder
//!
//! Overflow-checked addition of two signed 64-bit integers, with
//! interchangeable realizations and a conformance harness that proves they
//! all honour the same contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use register_adder::adder::{Adder, ReferenceAdder, SENTINEL};
//! use register_adder::harness::Harness;
//!
//! let adder = ReferenceAdder;
//! assert_eq!(adder.add(100, 200), 300);
//! assert_eq!(adder.add(i64::MAX, 1), SENTINEL);
//!
//! let report = Harness::new().run(&adder).unwrap();
//! assert!(report.is_success());
//! ```
//!
//! ## Contract
//!
//! - In-range sums are returned exactly.
//! - Sums above `i64::MAX` or below `i64::MIN` return `0`. Nothing panics
//!   and nothing wraps.
//! - Every realization is pure and takes its operands by value through the
//!   platform C calling convention.
//!
//! ## Realizations
//!
//! - **Reference**: pure Rust, always linked.
//! - **Assembly**: hand-written for x86-64 and AArch64 Unix targets.
//! - **External**: any object defining `register_adder`, bound with the
//!   `external` cargo feature.

pub mod adder;
pub mod harness;

pub use adder::{
    Adder, AdderError, ReferenceAdder, SENTINEL, classify, linked_adders, register_adder,
};
pub use harness::{Harness, HarnessError, RunReport};

use tracing::debug;

// ------------------------------------------------------------------------------------------------
// Configuration
// ------------------------------------------------------------------------------------------------

/// Environment variable overriding [`HarnessConfig::parity_iterations`].
pub const ENV_PARITY_ITERATIONS: &str = "REGISTER_ADDER_PARITY_ITERATIONS";

/// Environment variable overriding [`HarnessConfig::seed`].
pub const ENV_SEED: &str = "REGISTER_ADDER_SEED";

/// Upper bound for [`HarnessConfig::parity_iterations`].
pub const MAX_PARITY_ITERATIONS: usize = 10_000_000;

/// Configuration for a conformance run.
///
/// These settings tune how deep the run goes; which realizations are
/// checked is fixed at build time.
///
/// # Example
///
/// ```rust
/// use register_adder::HarnessConfig;
///
/// let config = HarnessConfig {
///     parity_iterations: 500,
///     ..HarnessConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Random operand pairs compared between each realization and the
    /// reference.
    ///
    /// Default: 10 000. `0` disables the parity check. Must be
    /// ≤ [`MAX_PARITY_ITERATIONS`].
    pub parity_iterations: usize,

    /// Seed for the parity operand generator.
    ///
    /// Default: `0x5EED_ADD5`.
    pub seed: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            parity_iterations: 10_000,
            seed: 0x5EED_ADD5,
        }
    }
}

impl HarnessConfig {
    /// Validates all configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] if a field is out of range.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.parity_iterations > MAX_PARITY_ITERATIONS {
            return Err(HarnessError::InvalidConfig(format!(
                "parity_iterations must be <= {MAX_PARITY_ITERATIONS}"
            )));
        }
        Ok(())
    }

    /// Builds a configuration from the defaults, overlaid with
    /// [`ENV_PARITY_ITERATIONS`] and [`ENV_SEED`] when set.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] if a variable does not parse
    /// or the result fails [`HarnessConfig::validate`].
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HarnessConfig::from_env`], reading variables through
    /// `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] if a value returned by
    /// `lookup` does not parse or the result fails
    /// [`HarnessConfig::validate`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PARITY_ITERATIONS) {
            config.parity_iterations = raw.trim().parse::<usize>().map_err(|e| {
                HarnessError::InvalidConfig(format!("{ENV_PARITY_ITERATIONS}={raw:?}: {e}"))
            })?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = parse_seed(&raw)
                .ok_or_else(|| HarnessError::InvalidConfig(format!("{ENV_SEED}={raw:?}")))?;
        }

        config.validate()?;
        debug!(?config, "harness config loaded");
        Ok(config)
    }
}

/// Accepts decimal or `0x`-prefixed hexadecimal.
fn parse_seed(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16).ok(),
        None => raw.replace('_', "").parse().ok(),
    }
}
