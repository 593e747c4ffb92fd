//! Per-domain result record.

use serde::Serialize;

/// Which lookups failed for a reason other than the records being absent.
///
/// NXDOMAIN and empty answers leave these flags false. Timeouts, server
/// failures and unparseable names set them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LookupFailures {
    pub mx: bool,
    pub spf: bool,
    pub dmarc: bool,
}

impl LookupFailures {
    pub fn any(&self) -> bool {
        self.mx || self.spf || self.dmarc
    }
}

/// Mail-authentication posture of one domain.
///
/// `domain` is the input line exactly as read. The SPF and DMARC flags are
/// derived from their record fields, so `has_spf` is true iff `spf_record`
/// is non-empty (likewise for DMARC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResult {
    pub domain: String,
    #[serde(rename = "hasMX")]
    pub has_mx: bool,
    #[serde(rename = "hasSPF")]
    pub has_spf: bool,
    #[serde(rename = "spfRecord")]
    pub spf_record: String,
    #[serde(rename = "hasDMARC")]
    pub has_dmarc: bool,
    #[serde(rename = "dmarcRecord")]
    pub dmarc_record: String,
    #[serde(rename = "lookupFailures")]
    pub lookup_failures: LookupFailures,
}

impl DomainResult {
    /// Builds a result from the selected records.
    pub fn new(
        domain: impl Into<String>,
        has_mx: bool,
        spf_record: Option<String>,
        dmarc_record: Option<String>,
        lookup_failures: LookupFailures,
    ) -> Self {
        let spf_record = spf_record.unwrap_or_default();
        let dmarc_record = dmarc_record.unwrap_or_default();
        Self {
            domain: domain.into(),
            has_mx,
            has_spf: !spf_record.is_empty(),
            spf_record,
            has_dmarc: !dmarc_record.is_empty(),
            dmarc_record,
            lookup_failures,
        }
    }

    /// A row with no signals at all.
    pub fn absent(domain: impl Into<String>) -> Self {
        Self::new(domain, false, None, None, LookupFailures::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_follow_records() {
        let result = DomainResult::new(
            "example.com",
            true,
            Some("v=spf1 -all".to_string()),
            None,
            LookupFailures::default(),
        );
        assert!(result.has_spf);
        assert_eq!(result.spf_record, "v=spf1 -all");
        assert!(!result.has_dmarc);
        assert_eq!(result.dmarc_record, "");
    }

    #[test]
    fn test_empty_record_text_is_not_a_signal() {
        // Only reachable with an empty prefix; still must not break the invariant
        let result = DomainResult::new(
            "example.com",
            false,
            Some(String::new()),
            Some(String::new()),
            LookupFailures::default(),
        );
        assert!(!result.has_spf);
        assert!(!result.has_dmarc);
    }

    #[test]
    fn test_absent() {
        let result = DomainResult::absent("nodns.invalid");
        assert_eq!(result.domain, "nodns.invalid");
        assert!(!result.has_mx);
        assert!(!result.has_spf);
        assert!(!result.has_dmarc);
        assert!(result.spf_record.is_empty());
        assert!(result.dmarc_record.is_empty());
        assert!(!result.lookup_failures.any());
    }

    #[test]
    fn test_serialized_field_names() {
        let result = DomainResult::absent("a.example");
        let value = serde_json::to_value(&result).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "domain",
            "hasMX",
            "hasSPF",
            "spfRecord",
            "hasDMARC",
            "dmarcRecord",
            "lookupFailures",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(value["lookupFailures"]["mx"], false);
    }
}
