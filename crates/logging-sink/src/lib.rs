#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the two destinations a rendered log line can reach:
//! the console (standard output or standard error) and an append-only log
//! file. The crate knows nothing about levels, categories or formatting; it
//! receives finished text and writes it.
//!
//! # Design
//!
//! - [`ConsoleSink`] abstracts the console so callers can swap the process
//!   streams ([`StdConsole`]) for an in-memory capture ([`MemoryConsole`]).
//!   Each call performs a single `write_all` followed by a flush and is not
//!   synchronised against other console writes.
//! - [`FileSink`] opens the target file in append mode, writes the text,
//!   flushes and closes the handle on every call. The whole sequence runs
//!   under one mutex so concurrent appends never interleave.
//!
//! # Errors
//!
//! Every fallible operation returns [`SinkError`], which records the path
//! involved together with the underlying [`std::io::Error`].
//!
//! # Examples
//!
//! ```
//! use logging_sink::{ConsoleSink, FileSink, MemoryConsole, Stream};
//!
//! let console = MemoryConsole::new();
//! console.write(Stream::Stdout, "ready\n").unwrap();
//! assert_eq!(console.stdout(), "ready\n");
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("app.log");
//! let file = FileSink::new();
//! file.append(&path, "first\n").unwrap();
//! file.append(&path, "second\n").unwrap();
//! assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
//! ```

mod console;
mod error;
mod file;

pub use console::{ConsoleSink, MemoryConsole, StdConsole, Stream};
pub use error::SinkError;
pub use file::FileSink;
