//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_posture` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status on fatal errors
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mail_posture::initialization::init_logger_with;
use mail_posture::{print_summary, run_check, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_check(config).await {
        Ok(report) => {
            print_summary(&report);
            Ok(())
        }
        Err(e) => {
            log::error!("{:#}", e);
            process::exit(1);
        }
    }
}
