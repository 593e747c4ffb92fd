//! Configuration constants used as defaults.

/// DNS query timeout in seconds.
/// Kept at 10s so slow authoritative servers for TXT lookups still answer.
pub const DNS_TIMEOUT_SECS: u64 = 10;

/// Number of attempts the resolver makes per query before giving up.
pub const DNS_ATTEMPTS: usize = 2;

/// Number of domains classified at once. One keeps the reference sequential behavior.
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Input path that means "read domains from stdin".
pub const STDIN_PATH: &str = "-";

// Record selection prefixes (case-sensitive)
pub const SPF_PREFIX: &str = "v=spf1";
pub const DMARC_PREFIX: &str = "v=DMARC1";

/// Label prepended to a domain to find its DMARC policy.
pub const DMARC_LABEL: &str = "_dmarc.";

/// CSV header for the default output format.
///
/// The fifth column reads `hasDMRAC`. Existing consumers of this output
/// key on this exact text, so it is kept as is.
pub const CSV_HEADER: [&str; 6] = [
    "domain",
    "hasMX",
    "hasSPF",
    "spfRecord",
    "hasDMRAC",
    "dmarcRecord",
];

/// Extra columns appended when `--lookup-errors` is set.
pub const LOOKUP_ERROR_COLUMNS: [&str; 3] =
    ["mxLookupFailed", "spfLookupFailed", "dmarcLookupFailed"];

/// Log progress every this many classified domains.
pub const PROGRESS_LOG_INTERVAL: usize = 1000;
