//! The resolution capability the classifier is written against.

use std::future::Future;
use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;

use super::error::LookupError;
use super::records::{lookup_mx_records, lookup_txt_records};

/// DNS resolver trait for abstracting MX and TXT lookups.
///
/// Implementations must not cache answers: each call reflects the current
/// state of DNS. Retransmission of an unanswered query is left to the
/// transport (the resolver's attempt count, `--dns-attempts`); the classifier
/// itself never repeats a lookup.
pub trait DnsLookup: Send + Sync {
    /// MX records for `name` as `(preference, exchange)` pairs.
    fn lookup_mx(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<(u16, String)>, LookupError>> + Send;

    /// TXT records for `name`, one string per record, in resolver order.
    fn lookup_txt(&self, name: &str) -> impl Future<Output = Result<Vec<String>, LookupError>> + Send;
}

/// Hickory DNS resolver implementation.
#[derive(Clone)]
pub struct HickoryLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryLookup {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

impl DnsLookup for HickoryLookup {
    async fn lookup_mx(&self, name: &str) -> Result<Vec<(u16, String)>, LookupError> {
        lookup_mx_records(name, &self.resolver).await
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        lookup_txt_records(name, &self.resolver).await
    }
}
