//! mail_posture library: bulk MX/SPF/DMARC posture checks
//!
//! For every domain in a list, this library reports whether the domain
//! publishes MX records, an SPF policy (`v=spf1` TXT record) and a DMARC
//! policy (`v=DMARC1` TXT record at `_dmarc.<domain>`), and writes one row
//! per domain in input order.
//!
//! # Example
//!
//! ```no_run
//! use mail_posture::{Config, run_check};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("domains.txt"),
//!     max_concurrency: 8,
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! eprintln!("Checked {} domains", report.total_domains);
//! # Ok(())
//! # }
//! ```
//!
//! Classification can also be driven directly against any [`DnsLookup`]
//! implementation, such as [`MockResolver`]:
//!
//! ```
//! use std::sync::Arc;
//! use mail_posture::{DomainClassifier, MockResolver, ProcessingStats};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let resolver = MockResolver::new();
//! resolver.add_txt("example.com", vec!["v=spf1 -all".to_string()]);
//!
//! let classifier = DomainClassifier::new(resolver, Arc::new(ProcessingStats::new()));
//! let result = classifier.classify("example.com").await;
//! assert!(result.has_spf);
//! assert!(!result.has_dmarc);
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
mod classify;
pub mod config;
pub mod dns;
mod error_handling;
pub mod export;
pub mod initialization;
mod models;
mod run;

// Re-export public API
pub use classify::DomainClassifier;
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use dns::{DnsLookup, HickoryLookup, LookupError, MockResolver};
pub use error_handling::{ErrorType, InitializationError, ProcessingStats};
pub use export::RecordWriter;
pub use models::{DomainResult, LookupFailures};
pub use run::{check_stream, run_check, CheckCounts, CheckReport};

// Used by the binary for its end-of-run log lines
pub use app::print_summary;
