//! In-memory resolver for tests and offline runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use super::error::LookupError;
use super::lookup::DnsLookup;

#[derive(Default)]
struct Zone {
    mx_records: HashMap<String, Vec<(u16, String)>>,
    txt_records: HashMap<String, Vec<String>>,
    failures: HashMap<String, LookupError>,
    delays: HashMap<String, Duration>,
}

/// Mock DNS resolver.
///
/// Names are matched exactly as given, with no case folding. A name with
/// no configured records answers with [`LookupError::NoRecords`], like a
/// real resolver would. Clones share the same zone.
#[derive(Clone, Default)]
pub struct MockResolver {
    zone: Arc<Mutex<Zone>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn zone(&self) -> MutexGuard<'_, Zone> {
        // A poisoned lock only means another test thread panicked mid-insert
        self.zone.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add_mx(&self, name: &str, records: Vec<(u16, String)>) {
        self.zone().mx_records.insert(name.to_string(), records);
    }

    pub fn add_txt(&self, name: &str, records: Vec<String>) {
        self.zone().txt_records.insert(name.to_string(), records);
    }

    /// Every lookup of `name` answers NXDOMAIN.
    pub fn set_nxdomain(&self, name: &str) {
        self.set_failure(
            name,
            LookupError::NxDomain {
                name: name.to_string(),
            },
        );
    }

    /// Every lookup of `name` times out.
    pub fn set_timeout(&self, name: &str) {
        self.set_failure(
            name,
            LookupError::Timeout {
                name: name.to_string(),
            },
        );
    }

    /// Every lookup of `name` fails with a server failure.
    pub fn set_servfail(&self, name: &str) {
        self.set_failure(
            name,
            LookupError::Failed {
                name: name.to_string(),
                message: "server failure".to_string(),
            },
        );
    }

    pub fn set_failure(&self, name: &str, error: LookupError) {
        self.zone().failures.insert(name.to_string(), error);
    }

    /// Delays every answer for `name`.
    pub fn set_delay(&self, name: &str, delay: Duration) {
        self.zone().delays.insert(name.to_string(), delay);
    }

    async fn answer<T: Clone>(
        &self,
        name: &str,
        select: impl FnOnce(&Zone) -> Option<Vec<T>>,
    ) -> Result<Vec<T>, LookupError> {
        let delay = self.zone().delays.get(name).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let zone = self.zone();
        if let Some(error) = zone.failures.get(name) {
            return Err(error.clone());
        }
        match select(&zone) {
            Some(records) if !records.is_empty() => Ok(records),
            _ => Err(LookupError::NoRecords {
                name: name.to_string(),
            }),
        }
    }
}

impl DnsLookup for MockResolver {
    async fn lookup_mx(&self, name: &str) -> Result<Vec<(u16, String)>, LookupError> {
        self.answer(name, |zone| zone.mx_records.get(name).cloned())
            .await
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.answer(name, |zone| zone.txt_records.get(name).cloned())
            .await
    }
}
