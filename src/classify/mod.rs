//! Per-domain classification.
//!
//! Turns one domain into a [`DomainResult`] by querying MX records, TXT
//! records for SPF, and TXT records at `_dmarc.<domain>` for DMARC.

use std::sync::Arc;

use log::{debug, warn};

use crate::dns::{dmarc_name, extract_dmarc_record, extract_spf_record, DnsLookup, LookupError};
use crate::error_handling::{ErrorType, ProcessingStats};
use crate::models::{DomainResult, LookupFailures};

/// Classifies domains against a resolver.
///
/// Holds no per-domain state; the same classifier can serve any number of
/// concurrent `classify` calls.
pub struct DomainClassifier<D> {
    resolver: D,
    error_stats: Arc<ProcessingStats>,
}

impl<D: DnsLookup> DomainClassifier<D> {
    pub fn new(resolver: D, error_stats: Arc<ProcessingStats>) -> Self {
        Self {
            resolver,
            error_stats,
        }
    }

    pub fn error_stats(&self) -> &Arc<ProcessingStats> {
        &self.error_stats
    }

    /// Classifies one domain.
    ///
    /// The domain is queried exactly as given: empty strings, trailing dots and
    /// names that already carry a `_dmarc.` label are not rewritten. Lookup
    /// errors are logged and counted, then treated as "no records", so this
    /// never fails.
    pub async fn classify(&self, domain: &str) -> DomainResult {
        let dmarc_domain = dmarc_name(domain);

        // The three lookups are independent
        let (mx_result, txt_result, dmarc_result) = tokio::join!(
            self.resolver.lookup_mx(domain),
            self.resolver.lookup_txt(domain),
            self.resolver.lookup_txt(&dmarc_domain)
        );

        let mut failures = LookupFailures::default();

        let has_mx = match mx_result {
            Ok(mx) => {
                debug!("Found {} MX records for {}", mx.len(), domain);
                !mx.is_empty()
            }
            Err(e) => {
                failures.mx = self.record_failure(ErrorType::DnsMxLookupError, "MX", &e);
                false
            }
        };

        let spf_record = match txt_result {
            Ok(txt) => {
                debug!("Found {} TXT records for {}", txt.len(), domain);
                extract_spf_record(&txt)
            }
            Err(e) => {
                failures.spf = self.record_failure(ErrorType::DnsTxtLookupError, "TXT", &e);
                None
            }
        };

        let dmarc_record = match dmarc_result {
            Ok(txt) => {
                debug!("Found {} TXT records for {}", txt.len(), dmarc_domain);
                extract_dmarc_record(&txt)
            }
            Err(e) => {
                failures.dmarc = self.record_failure(ErrorType::DnsDmarcLookupError, "DMARC", &e);
                None
            }
        };

        DomainResult::new(domain, has_mx, spf_record, dmarc_record, failures)
    }

    /// Logs and counts a failed lookup. Returns true unless the error only
    /// says the records are absent.
    fn record_failure(&self, error_type: ErrorType, kind: &str, e: &LookupError) -> bool {
        warn!("{}", failure_message(kind, e));
        self.error_stats.increment_error(error_type);
        if e.is_timeout() {
            self.error_stats.increment_error(ErrorType::DnsLookupTimeout);
        }
        !e.is_absence()
    }
}

/// Warning text for a failed lookup. The error already carries the queried
/// name, so it is not repeated.
fn failure_message(kind: &str, e: &LookupError) -> String {
    format!("Failed to lookup {kind} records: {e}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::MockResolver;

    fn classifier(resolver: &MockResolver) -> DomainClassifier<MockResolver> {
        DomainClassifier::new(resolver.clone(), Arc::new(ProcessingStats::new()))
    }

    fn records(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_failure_message_names_the_query_once() {
        let errors = [
            LookupError::NxDomain {
                name: "_dmarc.gone.example".to_string(),
            },
            LookupError::NoRecords {
                name: "_dmarc.gone.example".to_string(),
            },
            LookupError::Timeout {
                name: "_dmarc.gone.example".to_string(),
            },
            LookupError::Failed {
                name: "_dmarc.gone.example".to_string(),
                message: "connection refused".to_string(),
            },
        ];
        for e in &errors {
            let message = failure_message("DMARC", e);
            assert!(message.starts_with("Failed to lookup DMARC records: "));
            assert_eq!(message.matches("_dmarc.gone.example").count(), 1, "{message}");
        }
    }

    #[test]
    fn test_failure_message_text() {
        let e = LookupError::NxDomain {
            name: "nodns.invalid".to_string(),
        };
        assert_eq!(
            failure_message("MX", &e),
            "Failed to lookup MX records: no such host: nodns.invalid"
        );
    }

    #[tokio::test]
    async fn test_fully_configured_domain() {
        let resolver = MockResolver::new();
        resolver.add_mx("example.com", vec![(10, "mx.example.com".to_string())]);
        resolver.add_txt(
            "example.com",
            records(&["v=spf1 include:_spf.example.com ~all"]),
        );
        resolver.add_txt("_dmarc.example.com", records(&["v=DMARC1; p=reject;"]));

        let result = classifier(&resolver).classify("example.com").await;

        assert_eq!(result.domain, "example.com");
        assert!(result.has_mx);
        assert!(result.has_spf);
        assert_eq!(result.spf_record, "v=spf1 include:_spf.example.com ~all");
        assert!(result.has_dmarc);
        assert_eq!(result.dmarc_record, "v=DMARC1; p=reject;");
        assert!(!result.lookup_failures.any());
    }

    #[tokio::test]
    async fn test_nxdomain_everywhere() {
        let resolver = MockResolver::new();
        resolver.set_nxdomain("nodns.invalid");
        resolver.set_nxdomain("_dmarc.nodns.invalid");
        let classifier = classifier(&resolver);

        let result = classifier.classify("nodns.invalid").await;

        assert_eq!(result, DomainResult::absent("nodns.invalid"));
        assert_eq!(classifier.error_stats().total_errors(), 3);
        assert_eq!(
            classifier
                .error_stats()
                .get_error_count(ErrorType::DnsDmarcLookupError),
            1
        );
    }

    #[tokio::test]
    async fn test_first_matching_record_is_selected() {
        let resolver = MockResolver::new();
        resolver.add_txt(
            "example.org",
            records(&["something-else", "v=spf1 -all", "v=spf1 +all"]),
        );

        let result = classifier(&resolver).classify("example.org").await;

        assert!(result.has_spf);
        assert_eq!(result.spf_record, "v=spf1 -all");
        assert!(!result.has_mx);
        assert!(!result.has_dmarc);
    }

    #[tokio::test]
    async fn test_dmarc_only_read_from_dmarc_name() {
        let resolver = MockResolver::new();
        // A DMARC record at the apex does not count
        resolver.add_txt("example.net", records(&["v=DMARC1; p=none"]));

        let result = classifier(&resolver).classify("example.net").await;

        assert!(!result.has_dmarc);
        assert!(!result.has_spf);
    }

    #[tokio::test]
    async fn test_spf_not_read_from_dmarc_name() {
        let resolver = MockResolver::new();
        resolver.add_txt("_dmarc.example.net", records(&["v=spf1 -all"]));

        let result = classifier(&resolver).classify("example.net").await;

        assert!(!result.has_spf);
        assert!(!result.has_dmarc);
    }

    #[tokio::test]
    async fn test_domain_used_verbatim() {
        let resolver = MockResolver::new();
        resolver.add_mx("Example.COM.", vec![(5, "mx.example.com".to_string())]);
        resolver.add_txt("_dmarc.Example.COM.", records(&["v=DMARC1; p=quarantine"]));

        let result = classifier(&resolver).classify("Example.COM.").await;

        assert_eq!(result.domain, "Example.COM.");
        assert!(result.has_mx);
        assert!(result.has_dmarc);
    }

    #[tokio::test]
    async fn test_empty_domain_still_yields_row() {
        let resolver = MockResolver::new();
        let result = classifier(&resolver).classify("").await;
        assert_eq!(result, DomainResult::absent(""));
    }

    #[tokio::test]
    async fn test_failure_on_one_lookup_keeps_the_others() {
        let resolver = MockResolver::new();
        resolver.set_timeout("_dmarc.partial.example");
        resolver.add_mx("partial.example", vec![(10, "mx.partial.example".to_string())]);
        resolver.add_txt("partial.example", records(&["v=spf1 mx -all"]));
        let classifier = classifier(&resolver);

        let result = classifier.classify("partial.example").await;

        assert!(result.has_mx);
        assert!(result.has_spf);
        assert!(!result.has_dmarc);
        assert_eq!(
            result.lookup_failures,
            LookupFailures {
                mx: false,
                spf: false,
                dmarc: true
            }
        );
        assert_eq!(
            classifier
                .error_stats()
                .get_error_count(ErrorType::DnsLookupTimeout),
            1
        );
    }

    #[tokio::test]
    async fn test_absence_is_not_a_lookup_failure() {
        let resolver = MockResolver::new();
        resolver.set_nxdomain("gone.example");
        resolver.set_servfail("_dmarc.gone.example");

        let result = classifier(&resolver).classify("gone.example").await;

        assert!(!result.lookup_failures.mx);
        assert!(!result.lookup_failures.spf);
        assert!(result.lookup_failures.dmarc);
    }

    #[tokio::test]
    async fn test_classify_is_idempotent() {
        let resolver = MockResolver::new();
        resolver.add_mx("example.com", vec![(10, "mx.example.com".to_string())]);
        resolver.add_txt("example.com", records(&["v=spf1 -all"]));
        let classifier = classifier(&resolver);

        let first = classifier.classify("example.com").await;
        let second = classifier.classify("example.com").await;

        assert_eq!(first, second);
    }
}
