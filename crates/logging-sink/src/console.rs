//! crates/logging-sink/src/console.rs
//! Console destinations: the process streams and an in-memory capture.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::SinkError;

/// Console stream a line is written to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Stream {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl Stream {
    /// Short lowercase name of the stream.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for console-bound log lines.
///
/// Implementations must treat each call as one atomic write of `text` to the
/// selected stream. No ordering is promised between separate calls.
pub trait ConsoleSink: Send + Sync {
    /// Writes `text` verbatim to `stream`.
    fn write(&self, stream: Stream, text: &str) -> Result<(), SinkError>;
}

/// Console sink backed by the process's standard output and error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    fn write_to<W: Write>(mut writer: W, stream: Stream, text: &str) -> Result<(), SinkError> {
        writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| SinkError::Console { stream, source })
    }
}

impl ConsoleSink for StdConsole {
    fn write(&self, stream: Stream, text: &str) -> Result<(), SinkError> {
        match stream {
            Stream::Stdout => Self::write_to(io::stdout().lock(), stream, text),
            Stream::Stderr => Self::write_to(io::stderr().lock(), stream, text),
        }
    }
}

/// Console sink that keeps everything in memory.
///
/// Useful in tests and in embedders that want to post-process console output.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    stdout: Mutex<String>,
    stderr: Mutex<String>,
}

impl MemoryConsole {
    /// Creates an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self, stream: Stream) -> MutexGuard<'_, String> {
        let buffer = match stream {
            Stream::Stdout => &self.stdout,
            Stream::Stderr => &self.stderr,
        };
        buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of everything written to standard output so far.
    #[must_use]
    pub fn stdout(&self) -> String {
        self.buffer(Stream::Stdout).clone()
    }

    /// Returns a copy of everything written to standard error so far.
    #[must_use]
    pub fn stderr(&self) -> String {
        self.buffer(Stream::Stderr).clone()
    }

    /// Drains both buffers, returning `(stdout, stderr)`.
    pub fn take(&self) -> (String, String) {
        let out = std::mem::take(&mut *self.buffer(Stream::Stdout));
        let err = std::mem::take(&mut *self.buffer(Stream::Stderr));
        (out, err)
    }

    /// Reports whether nothing has been captured on either stream.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer(Stream::Stdout).is_empty() && self.buffer(Stream::Stderr).is_empty()
    }
}

impl ConsoleSink for MemoryConsole {
    fn write(&self, stream: Stream, text: &str) -> Result<(), SinkError> {
        self.buffer(stream).push_str(text);
        Ok(())
    }
}

impl<T> ConsoleSink for std::sync::Arc<T>
where
    T: ConsoleSink + ?Sized,
{
    fn write(&self, stream: Stream, text: &str) -> Result<(), SinkError> {
        (**self).write(stream, text)
    }
}
