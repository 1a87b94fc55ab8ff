//! # Cutpoint Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Load configuration
//! 3. Initialize tracing (logging)
//! 4. Run the selected command
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    cutpoint_cli::run()
}
