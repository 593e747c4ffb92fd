//! DNS resolution and record selection.
//!
//! This module provides:
//! - The [`DnsLookup`] capability with a `hickory-resolver` implementation
//!   and an in-memory [`MockResolver`]
//! - Text record queries (TXT) with SPF/DMARC extraction
//! - Mail exchanger queries (MX)
//!
//! Names are always queried exactly as given.

mod error;
mod extract;
mod lookup;
mod mock;
mod records;

// Re-export public API
pub use error::LookupError;
pub use extract::{dmarc_name, extract_dmarc_record, extract_spf_record};
pub use lookup::{DnsLookup, HickoryLookup};
pub use mock::MockResolver;
pub use records::{lookup_mx_records, lookup_txt_records};
