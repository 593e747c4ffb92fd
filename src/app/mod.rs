//! Run-level reporting helpers.
//!
//! This module provides progress logging and end-of-run statistics used by
//! the driver loop and the binary.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{print_error_statistics, print_summary};
