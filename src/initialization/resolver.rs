//! DNS resolver initialization.
//!
//! This module builds the shared `hickory-resolver` instance with the
//! configured timeout and attempt count.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Builds resolver options from the CLI settings.
///
/// `ndots` is 0 so names are tried as given first, and the answer cache is
/// disabled so every lookup goes to the upstream servers. `attempts` is the
/// only retransmission.
pub fn resolver_opts(timeout_secs: u64, attempts: usize) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = attempts;
    opts.ndots = 0;
    opts.cache_size = 0;
    opts
}

/// Copies `config` keeping only its name servers.
///
/// The local domain and search list are dropped, so a name that does not
/// resolve is reported as absent instead of being retried under a search
/// suffix.
pub fn without_search_domains(config: &ResolverConfig) -> ResolverConfig {
    ResolverConfig::from_parts(None, vec![], config.name_servers().to_vec())
}

/// Initializes the DNS resolver for MX and TXT lookups.
///
/// Uses the name servers from the system configuration (`/etc/resolv.conf`
/// on Unix) when it can be read, otherwise the hickory default upstreams
/// (Google DNS), with a warning. Search domains are never applied. Timeout
/// and attempts always come from the arguments.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing.
pub fn init_resolver(timeout_secs: u64, attempts: usize) -> Arc<TokioAsyncResolver> {
    let config = match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, _system_opts)) => without_search_domains(&config),
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using default upstreams: {e}");
            ResolverConfig::default()
        }
    };

    Arc::new(TokioAsyncResolver::tokio(
        config,
        resolver_opts(timeout_secs, attempts),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::config::NameServerConfigGroup;
    use hickory_resolver::proto::rr::Name;
    use std::str::FromStr;

    #[test]
    fn test_resolver_opts() {
        let opts = resolver_opts(3, 1);
        assert_eq!(opts.timeout, Duration::from_secs(3));
        assert_eq!(opts.attempts, 1);
        assert_eq!(opts.ndots, 0);
        assert_eq!(opts.cache_size, 0);
    }

    #[test]
    fn test_without_search_domains() {
        let corp = Name::from_str("corp.example.").unwrap();
        let config = ResolverConfig::from_parts(
            Some(corp.clone()),
            vec![corp],
            NameServerConfigGroup::google(),
        );
        assert_eq!(config.search().len(), 1);

        let stripped = without_search_domains(&config);
        assert!(stripped.search().is_empty());
        assert!(stripped.domain().is_none());
        assert_eq!(stripped.name_servers().len(), config.name_servers().len());
        assert!(!stripped.name_servers().is_empty());
    }

    #[test]
    fn test_default_config_has_no_search_domains() {
        let stripped = without_search_domains(&ResolverConfig::default());
        assert!(stripped.search().is_empty());
        assert_eq!(
            stripped.name_servers().len(),
            ResolverConfig::default().name_servers().len()
        );
    }

    #[tokio::test]
    async fn test_init_resolver_does_not_panic() {
        let _resolver = init_resolver(1, 1);
    }
}
