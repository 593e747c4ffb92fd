//! Input and output handles for a run.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use log::info;
use tokio::io::AsyncRead;

use crate::config::Config;
use crate::export::IgnoreBrokenPipe;

pub(crate) type InputReader = Box<dyn AsyncRead + Unpin + Send>;
pub(crate) type OutputWriter = Box<dyn Write + Send>;

/// Opens the domain list: stdin for `-`, otherwise the named file.
pub(crate) async fn open_input(config: &Config) -> Result<InputReader> {
    if config.reads_stdin() {
        info!("Reading domains from stdin");
        return Ok(Box::new(tokio::io::stdin()));
    }

    let file = tokio::fs::File::open(&config.file)
        .await
        .with_context(|| format!("Failed to open input file: {}", config.file.display()))?;
    info!("Reading domains from {}", config.file.display());
    Ok(Box::new(file))
}

/// Opens the row destination: the `--output` file if set, otherwise stdout.
pub(crate) fn open_output(config: &Config) -> Result<OutputWriter> {
    match config.output.as_ref() {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(IgnoreBrokenPipe::new(io::stdout()))),
    }
}
