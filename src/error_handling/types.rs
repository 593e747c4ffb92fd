//! Error type definitions.
//!
//! This module defines the initialization error and the error categories
//! counted while classifying domains.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Types of errors that can occur while classifying a domain.
///
/// Each failed lookup increments the counter for its lookup kind. Timeouts
/// additionally increment `DnsLookupTimeout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    DnsMxLookupError,
    DnsTxtLookupError,
    DnsDmarcLookupError,
    DnsLookupTimeout,
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsMxLookupError => "DNS MX lookup error",
            ErrorType::DnsTxtLookupError => "DNS TXT lookup error",
            ErrorType::DnsDmarcLookupError => "DNS DMARC lookup error",
            ErrorType::DnsLookupTimeout => "DNS lookup timeout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_strings_are_unique() {
        let names: HashSet<&str> = ErrorType::iter().map(|e| e.as_str()).collect();
        assert_eq!(names.len(), ErrorType::iter().count());
    }
}
