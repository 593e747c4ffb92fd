//! Lookup failure type shared by every resolver implementation.

use thiserror::Error;

/// Why a DNS lookup produced no answer.
///
/// `NxDomain` and `NoRecords` mean the name was answered and simply holds no
/// such records. The other variants mean the question could not be answered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no such host: {name}")]
    NxDomain { name: String },

    #[error("no records found for {name}")]
    NoRecords { name: String },

    #[error("lookup of {name} timed out")]
    Timeout { name: String },

    #[error("lookup of {name} failed: {message}")]
    Failed { name: String, message: String },
}

impl LookupError {
    /// True when the error only says the records do not exist.
    pub fn is_absence(&self) -> bool {
        matches!(self, LookupError::NxDomain { .. } | LookupError::NoRecords { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupError::Timeout { .. })
    }

    /// The name that was queried.
    pub fn name(&self) -> &str {
        match self {
            LookupError::NxDomain { name }
            | LookupError::NoRecords { name }
            | LookupError::Timeout { name }
            | LookupError::Failed { name, .. } => name,
        }
    }
}
