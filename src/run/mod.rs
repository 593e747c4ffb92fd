//! Run orchestration.
//!
//! [`run_check`] wires configuration, resolver, classifier, input and output
//! together; [`check_stream`] is the loop itself and can be driven directly
//! with any reader, writer and resolver.

mod resources;
mod stream;

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use log::info;
use tokio::io::BufReader;

use crate::app::print_error_statistics;
use crate::classify::DomainClassifier;
use crate::config::Config;
use crate::dns::HickoryLookup;
use crate::error_handling::ProcessingStats;
use crate::export::RecordWriter;
use crate::initialization::init_resolver;

use resources::{open_input, open_output};

pub use stream::{check_stream, CheckCounts};

/// Results of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Number of input lines classified (one row each)
    pub total_domains: usize,
    /// Rows with `hasMX = true`
    pub with_mx: usize,
    /// Rows with an SPF record
    pub with_spf: usize,
    /// Rows with a DMARC record
    pub with_dmarc: usize,
    /// Failed lookups of any kind, including NXDOMAIN
    pub lookup_errors: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a check with the provided configuration against the live resolver.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or if the output
/// cannot be created or written. Lookup failures are never errors here.
///
/// # Example
///
/// ```no_run
/// use mail_posture::{run_check, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     file: PathBuf::from("domains.txt"),
///     output: Some(PathBuf::from("posture.csv")),
///     ..Default::default()
/// };
/// let report = run_check(config).await?;
/// println!("{} domains, {} with DMARC", report.total_domains, report.with_dmarc);
/// # Ok(())
/// # }
/// ```
pub async fn run_check(config: Config) -> Result<CheckReport> {
    let start_time = std::time::Instant::now();

    let input = BufReader::new(open_input(&config).await?);
    let mut writer = RecordWriter::new(open_output(&config)?, config.format, config.lookup_errors);

    let resolver = HickoryLookup::new(init_resolver(
        config.dns_timeout_secs,
        config.dns_attempts,
    ));
    let error_stats = Arc::new(ProcessingStats::new());
    let classifier = DomainClassifier::new(resolver, Arc::clone(&error_stats));

    if config.max_concurrency > 1 {
        info!(
            "Classifying up to {} domains concurrently",
            config.max_concurrency
        );
    }

    let counts = check_stream(input, &mut writer, &classifier, config.max_concurrency).await?;
    writer.into_inner()?.flush()?;

    print_error_statistics(&error_stats);

    Ok(CheckReport {
        total_domains: counts.total,
        with_mx: counts.with_mx,
        with_spf: counts.with_spf,
        with_dmarc: counts.with_dmarc,
        lookup_errors: error_stats.total_errors(),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
