//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions
//! - Processing statistics tracking (failed lookups by kind)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError};
