//! crates/logging-sink/src/error.rs
//! Errors raised while writing to a sink.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::console::Stream;

/// Error returned when a sink fails to deliver a line.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The file sink was asked to write but no output path is configured.
    #[error("no output file configured")]
    PathUnset,
    /// Opening (or creating) the log file failed.
    #[error("failed to open log file {path}: {source}")]
    Open {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Appending to an already opened log file failed.
    #[error("failed to append to log file {path}: {source}")]
    Write {
        /// Path of the file being appended to.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Writing to a console stream failed.
    #[error("failed to write to {stream}: {source}")]
    Console {
        /// Stream the write was aimed at.
        stream: Stream,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    /// Returns the underlying I/O error, if any.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::PathUnset => None,
            Self::Open { source, .. } | Self::Write { source, .. } | Self::Console { source, .. } => {
                Some(source)
            }
        }
    }
}
