//! The line-driven classification loop.

use std::io::Write;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::log_progress;
use crate::classify::DomainClassifier;
use crate::config::PROGRESS_LOG_INTERVAL;
use crate::dns::DnsLookup;
use crate::export::RecordWriter;
use crate::models::DomainResult;

/// Tallies of the rows written by [`check_stream`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckCounts {
    pub total: usize,
    pub with_mx: usize,
    pub with_spf: usize,
    pub with_dmarc: usize,
}

impl CheckCounts {
    fn record(&mut self, result: &DomainResult) {
        self.total += 1;
        self.with_mx += usize::from(result.has_mx);
        self.with_spf += usize::from(result.has_spf);
        self.with_dmarc += usize::from(result.has_dmarc);
    }
}

/// Turns one raw line into a domain string.
///
/// Drops the `\n` terminator and then one trailing `\r`, so LF, CRLF and a
/// final unterminated line ending in `\r` all read the same. Bytes that are not
/// valid UTF-8 are replaced rather than rejected, so every line still gets a row.
fn decode_line(mut raw: Vec<u8>) -> String {
    if raw.last() == Some(&b'\n') {
        raw.pop();
    }
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }
    String::from_utf8_lossy(&raw).into_owned()
}

/// Yields lines until the end of input or the first read error, after which
/// it stops.
fn domain_lines<R>(reader: R) -> impl futures::Stream<Item = std::io::Result<String>>
where
    R: AsyncBufRead + Unpin,
{
    stream::unfold(Some(reader), |state: Option<R>| async move {
        let mut reader = state?;
        let mut raw = Vec::new();
        match reader.read_until(b'\n', &mut raw).await {
            Ok(0) => None,
            Ok(_) => Some((Ok(decode_line(raw)), Some(reader))),
            Err(e) => Some((Err(e), None)),
        }
    })
}

/// Classifies every line of `reader` and writes one row per line.
///
/// The header is written first, even for empty input. Lines are taken as
/// read (only the LF or CRLF terminator is removed), so blank lines and lines
/// that are not valid UTF-8 produce rows too. Up to `max_concurrency` domains are classified at once, but rows
/// are always written in input order.
///
/// # Errors
///
/// A read error on `reader` stops the loop: rows for earlier lines have
/// been written, nothing after is, and the error is returned. Write errors
/// are returned as well.
pub async fn check_stream<R, W, D>(
    reader: R,
    writer: &mut RecordWriter<W>,
    classifier: &DomainClassifier<D>,
    max_concurrency: usize,
) -> Result<CheckCounts>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    D: DnsLookup,
{
    writer.write_header()?;

    let start_time = std::time::Instant::now();
    let mut counts = CheckCounts::default();

    let results = domain_lines(reader)
        .map(move |line| async move {
            match line {
                Ok(domain) => Ok(classifier.classify(&domain).await),
                Err(e) => Err(e),
            }
        })
        .buffered(max_concurrency.max(1));
    futures::pin_mut!(results);

    while let Some(item) = results.next().await {
        let result = item.context("could not read from the input")?;
        debug!("Classified {:?}", result.domain);
        writer.write_result(&result)?;
        counts.record(&result);

        if counts.total % PROGRESS_LOG_INTERVAL == 0 {
            log_progress(start_time, counts.total);
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line_terminators() {
        assert_eq!(decode_line(b"a.example\n".to_vec()), "a.example");
        assert_eq!(decode_line(b"a.example\r\n".to_vec()), "a.example");
        assert_eq!(decode_line(b"a.example\r".to_vec()), "a.example");
        assert_eq!(decode_line(b"a.example".to_vec()), "a.example");
        assert_eq!(decode_line(b"\n".to_vec()), "");
    }

    #[test]
    fn test_decode_line_strips_only_one_carriage_return() {
        assert_eq!(decode_line(b"a.example\r\r\n".to_vec()), "a.example\r");
    }

    #[test]
    fn test_decode_line_keeps_surrounding_whitespace() {
        assert_eq!(decode_line(b" a.example \n".to_vec()), " a.example ");
    }

    #[test]
    fn test_decode_line_invalid_utf8_is_replaced() {
        assert_eq!(
            decode_line(b"b\xe9.example\n".to_vec()),
            "b\u{FFFD}.example"
        );
    }
}
