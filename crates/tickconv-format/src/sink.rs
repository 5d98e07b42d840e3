//! Append-only line sink.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Append-only destination for formatted tick lines.
///
/// Lines appear in exactly the order they are written; the sink never
/// reorders or deduplicates. Single-writer by design: the decoders are
/// never invoked concurrently against one sink.
#[derive(Debug)]
pub struct SequentialSink<W: Write> {
    inner: W,
    lines: u64,
}

impl<W: Write> SequentialSink<W> {
    /// Wraps a writer in a sink.
    pub const fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }

    /// Appends one pre-rendered, newline-terminated line.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.lines += 1;
        Ok(())
    }

    /// Number of lines written so far.
    #[must_use]
    pub const fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl SequentialSink<BufWriter<File>> {
    /// Opens (or creates) a file for appending and wraps it in a sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn append_to(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}
