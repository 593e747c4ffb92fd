//! Output stage.
//!
//! This module writes classification results as verbatim CSV (the default),
//! RFC 4180 quoted CSV, or JSONL.

mod pipe;
mod writer;

pub(crate) use pipe::IgnoreBrokenPipe;
pub use writer::RecordWriter;
