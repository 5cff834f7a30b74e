//! crates/logging-sink/src/file.rs
//! Append-only log file sink.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use crate::error::SinkError;

/// Permission bits applied when the log file is created.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Sink that appends text to a log file.
///
/// The file is opened, appended to, flushed and closed on every call; no
/// descriptor outlives [`append`](Self::append). One mutex covers the whole
/// sequence, so appends issued from many threads land as whole, separate
/// chunks. The parent directory must already exist.
#[derive(Debug, Default)]
pub struct FileSink {
    lock: Mutex<()>,
}

impl FileSink {
    /// Creates a sink with its own write lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` to the file at `path`, creating the file if needed.
    ///
    /// An empty path is rejected with [`SinkError::PathUnset`] before the lock
    /// is taken.
    pub fn append(&self, path: &Path, text: &str) -> Result<(), SinkError> {
        if path.as_os_str().is_empty() {
            return Err(SinkError::PathUnset);
        }

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut file = open_append(path)?;
        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| SinkError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

fn open_append(path: &Path) -> Result<File, SinkError> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path).map_err(|source| SinkError::Open {
        path: path.to_path_buf(),
        source,
    })
}
