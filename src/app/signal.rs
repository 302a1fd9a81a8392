use anyhow::{Context, Result};

/// Exit status used when the run is interrupted (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

pub const CANCELLED_MESSAGE: &str = "Operation cancelled by user. Exiting.";

/// Registers a Ctrl+C handler that aborts the run immediately.
///
/// Nothing is cleaned up: a half-written dump is simply overwritten by the
/// next successful run.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        log::debug!("Interrupt received.");
        eprintln!("\n{}", CANCELLED_MESSAGE);
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })
    .context("Failed to set Ctrl+C signal handler")
}
