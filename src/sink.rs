//! Output sink capability.
//!
//! The show never talks to stdout directly; it writes through [`TermSink`]
//! so tests can capture the emitted byte stream without a terminal attached.

use std::io::{self, Write};

/// A destination for the escape-sequence stream.
pub trait TermSink {
    /// Write a chunk of text (printable characters and/or escape codes).
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Flush buffered output so it becomes visible immediately.
    ///
    /// The program never writes a newline, so visible progress depends on
    /// explicit flushes after each timed write.
    fn flush(&mut self) -> io::Result<()>;
}

/// Production sink over the process's stdout.
pub struct StdoutSink {
    out: io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TermSink for StdoutSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Recording sink (for testing).
///
/// Keeps every `write_text` chunk in order plus a flush count, so tests can
/// assert both the concatenated stream and the per-call write pattern.
#[derive(Debug, Default)]
pub struct CaptureSink {
    writes: Vec<String>,
    flushes: usize,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All chunks written so far, in call order.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Number of flush calls so far.
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// The whole stream concatenated in write order.
    pub fn stream(&self) -> String {
        self.writes.concat()
    }
}

impl TermSink for CaptureSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
