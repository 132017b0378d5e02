//! Conformance runner.
//!
//! Runs the harness against every realization linked into this build,
//! then checks each non-reference realization against the reference on
//! random operands. Human-readable results go to stdout, log records to
//! stderr (filtered by `RUST_LOG`, default `warn`).
//!
//! Exit status is `0` only if nothing failed.

use std::process::ExitCode;

use register_adder::harness::check_parity;
use register_adder::{Adder, Harness, HarnessConfig, HarnessError, ReferenceAdder, linked_adders};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const RULE: &str = "=====================================";

fn main() -> ExitCode {
    init_tracing();

    println!("{RULE}");
    println!("Running register_adder conformance tests");
    println!("{RULE}\n");

    let outcome = HarnessConfig::from_env().and_then(|config| run(&config));

    match outcome {
        Ok(failed) => {
            println!("\n{RULE}");
            println!("Test Results: {failed} tests failed");
            println!("{RULE}");
            if failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("conformance run aborted: {e}");
            println!("\nAborted: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Returns the number of failed cases, counting each failed parity check
/// as one.
fn run(config: &HarnessConfig) -> Result<usize, HarnessError> {
    let harness = Harness::new();
    let reference = ReferenceAdder;
    let adders = linked_adders();

    info!(
        realizations = adders.len(),
        parity_iterations = config.parity_iterations,
        seed = config.seed,
        "conformance run started"
    );

    let mut failed = 0;
    for adder in &adders {
        println!("Running basic {} tests...", adder.name());
        harness.run_sanity(adder.as_ref())?;
        println!("Basic {} tests passed!", adder.name());

        let report = harness.run_recorded(adder.as_ref());
        println!("{report}");
        failed += report.failed();

        if config.parity_iterations > 0 && adder.name() != reference.name() {
            let parity = check_parity(
                adder.as_ref(),
                &reference,
                config.parity_iterations,
                config.seed,
            );
            println!("{parity}");
            failed += parity.failed();
        }
    }

    Ok(failed)
}
