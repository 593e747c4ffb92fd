//! DNS record extraction utilities.
//!
//! This module provides functions to pick SPF and DMARC policies out of
//! TXT record collections.

use crate::config::{DMARC_LABEL, DMARC_PREFIX, SPF_PREFIX};

/// Returns the first record starting with `prefix`, in the order given.
///
/// The match is case-sensitive and the record is not trimmed, so a record
/// with leading whitespace does not match.
fn first_with_prefix(txt_records: &[String], prefix: &str) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.starts_with(prefix))
        .cloned()
}

/// Extracts SPF record from TXT records.
///
/// SPF records start with "v=spf1". When several records match, the first
/// one wins and the rest are ignored.
///
/// # Arguments
///
/// * `txt_records` - TXT record strings in resolver order
///
/// # Returns
///
/// The first SPF record found, or `None` if no SPF record exists.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    first_with_prefix(txt_records, SPF_PREFIX)
}

/// Extracts DMARC record from TXT records.
///
/// DMARC records live at `_dmarc.<domain>` (see [`dmarc_name`]) and start
/// with "v=DMARC1".
///
/// # Arguments
///
/// * `txt_records` - TXT record strings in resolver order
///
/// # Returns
///
/// The first DMARC record found, or `None` if no DMARC record exists.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    first_with_prefix(txt_records, DMARC_PREFIX)
}

/// Builds the name holding a domain's DMARC policy.
///
/// Plain concatenation: a trailing dot or an existing `_dmarc.` label on
/// `domain` is kept as is.
pub fn dmarc_name(domain: &str) -> String {
    format!("{DMARC_LABEL}{domain}")
}
