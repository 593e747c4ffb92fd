//! DNS record queries (TXT, MX) against hickory.
//!
//! This module provides functions to query the record types the classifier
//! needs:
//! - Text records (TXT)
//! - Mail exchanger records (MX)

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::error::LookupError;

/// Maps a hickory error onto [`LookupError`].
pub(crate) fn classify_resolve_error(name: &str, e: &ResolveError) -> LookupError {
    let name = name.to_string();
    match e.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NXDomain => LookupError::NxDomain { name },
            ResponseCode::NoError => LookupError::NoRecords { name },
            code => LookupError::Failed {
                name,
                message: format!("server responded with {code}"),
            },
        },
        ResolveErrorKind::Timeout => LookupError::Timeout { name },
        _ => {
            let message = e.to_string();
            if message.contains("timed out") || message.contains("timeout") {
                LookupError::Timeout { name }
            } else {
                LookupError::Failed { name, message }
            }
        }
    }
}

/// Queries TXT (text) records for a domain.
///
/// # Arguments
///
/// * `domain` - The name to query, used as given
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// One string per TXT record, in the order the resolver returned them.
/// Records split into several character-strings are joined without a separator.
///
/// # Errors
///
/// Returns a [`LookupError`] when the lookup fails or the name has no TXT records.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, LookupError> {
    let lookup = resolver
        .lookup(domain, RecordType::TXT)
        .await
        .map_err(|e| classify_resolve_error(domain, &e))?;

    let txt_records: Vec<String> = lookup
        .iter()
        .filter_map(|rdata| {
            if let RData::TXT(txt) = rdata {
                Some(
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .collect::<Vec<String>>()
                        .join(""),
                )
            } else {
                None
            }
        })
        .collect();
    Ok(txt_records)
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Arguments
///
/// * `domain` - The name to query, used as given
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of (priority, hostname) tuples, sorted by priority (lower = higher priority).
///
/// # Errors
///
/// Returns a [`LookupError`] when the lookup fails or the name has no MX records.
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<(u16, String)>, LookupError> {
    let lookup = resolver
        .lookup(domain, RecordType::MX)
        .await
        .map_err(|e| classify_resolve_error(domain, &e))?;

    let mut mx_records: Vec<(u16, String)> = lookup
        .iter()
        .filter_map(|rdata| {
            if let RData::MX(mx) = rdata {
                Some((mx.preference(), mx.exchange().to_utf8()))
            } else {
                None
            }
        })
        .collect();
    // Sort by priority (lower preference = higher priority)
    mx_records.sort_by_key(|(priority, _)| *priority);
    Ok(mx_records)
}
