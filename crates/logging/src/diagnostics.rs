//! crates/logging/src/diagnostics.rs
//! Side channel for problems the logger hits while logging.
//!
//! Nothing here ever reaches the caller of an emit operation. Failures are
//! turned into a [`Diagnostic`] and handed to a [`DiagnosticHandler`], which by
//! default prints one line to standard error.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use logging_sink::SinkError;

/// A problem observed by the logger.
#[derive(Debug)]
pub enum Diagnostic {
    /// A verbosity name was not recognised; the threshold is unchanged.
    InvalidVerbosity {
        /// The rejected input.
        value: String,
    },
    /// File output was requested without an output path.
    FileOutputWithoutPath,
    /// Appending to the log file failed.
    FileSink(SinkError),
    /// Writing to the console failed.
    ConsoleSink(SinkError),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVerbosity { value } => {
                write!(f, "verbosity {value:?} is not valid; keeping current setting")
            }
            Self::FileOutputWithoutPath => {
                f.write_str("file output cannot start without an output file")
            }
            Self::FileSink(err) | Self::ConsoleSink(err) => err.fmt(f),
        }
    }
}

/// Receiver of [`Diagnostic`]s.
pub trait DiagnosticHandler: Send + Sync {
    /// Handles one diagnostic. Must not panic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Writes each diagnostic as `logging: <text>` on standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrDiagnostics;

impl DiagnosticHandler for StderrDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        let line = format!("logging: {diagnostic}\n");
        // Nowhere left to report a failing stderr.
        let _ = io::stderr().lock().write_all(line.as_bytes());
    }
}

/// Collects diagnostic text in memory.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    entries: Mutex<Vec<String>>,
}

impl MemoryDiagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything collected so far.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of diagnostics currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Reports whether nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticHandler for MemoryDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.to_string());
    }
}

impl<T> DiagnosticHandler for std::sync::Arc<T>
where
    T: DiagnosticHandler + ?Sized,
{
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}
