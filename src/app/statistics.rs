//! Statistics printing.
//!
//! Everything here goes to the log (stderr); stdout is reserved for rows.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};
use crate::run::CheckReport;

/// Prints lookup error counts to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();

    if total_errors > 0 {
        info!("Lookup Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }
}

/// Prints a one-line summary of the run.
pub fn print_summary(report: &CheckReport) {
    info!(
        "✅ Checked {} domain{} ({} with MX, {} with SPF, {} with DMARC, {} failed lookups) in {:.1}s",
        report.total_domains,
        if report.total_domains == 1 { "" } else { "s" },
        report.with_mx,
        report.with_spf,
        report.with_dmarc,
        report.lookup_errors,
        report.elapsed_seconds
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_statistics_no_errors() {
        let stats = ProcessingStats::new();
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_error_statistics_with_errors() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::DnsTxtLookupError);
        stats.increment_error(ErrorType::DnsLookupTimeout);
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_summary() {
        let report = CheckReport {
            total_domains: 1,
            with_mx: 1,
            with_spf: 0,
            with_dmarc: 0,
            lookup_errors: 2,
            elapsed_seconds: 0.5,
        };
        print_summary(&report);
    }
}
