#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a leveled, category-tagged logger. Every message carries a
//! [`Level`] (regular, verbose, debug) and a [`Category`] (info, alert, error,
//! notice, task, bench). A single [`Logger`] decides per message whether it is
//! written to the console, appended to a log file, both, or dropped.
//!
//! # Design
//!
//! - A [`Verbosity`] threshold acts as a global ceiling: a message above it is
//!   dropped before any formatting, whatever the routing says.
//! - A [`RoutingMatrix`] holds independent console and file gates for each
//!   level. Dual mode additionally mirrors file-routed messages to the console.
//! - Lines are rendered as `[timestamp\t][label: ]message\n`. Console labels
//!   may be coloured; file lines never contain escape sequences.
//! - Error messages go to standard error, everything else to standard output.
//! - File appends open, write and close the file under a lock so concurrent
//!   emits never interleave within a line.
//!
//! # Invariants
//!
//! - No emit operation returns an error or panics. Sink failures and invalid
//!   configuration input are reported through a [`DiagnosticHandler`].
//! - A message reaches the console at most once per emit call.
//! - Console and file variants of one message share the same timestamp.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{Level, Logger, MemoryConsole, Verbosity};
//!
//! let console = Arc::new(MemoryConsole::new());
//! let logger = Logger::builder().console(Arc::clone(&console)).build();
//! logger.toggle_timestamp();
//! logger.toggle_color();
//! logger.set_verbosity(Verbosity::Verbose);
//!
//! logging::info!(logger, "starting");
//! logging::task!(logger, Level::Verbose => "step {}", 2);
//! logging::error!(logger, "failed");
//!
//! assert_eq!(console.stdout(), "[INFO]: starting\n[TASK]: step 2\n");
//! assert_eq!(console.stderr(), "[ERROR]: failed\n");
//! ```
//!
//! # Features
//!
//! - `serde`: serialization for [`Config`] and its parts.
//! - `tracing`: [`LoggerLayer`] forwards tracing events into a [`Logger`], and
//!   diagnostics are also emitted as tracing warnings.

mod clock;
mod config;
mod diagnostics;
mod format;
mod levels;
mod logger;
mod macros;
mod style;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CategoryLabels, Config, DEFAULT_TIME_FORMAT, Route, RoutingMatrix};
pub use diagnostics::{Diagnostic, DiagnosticHandler, MemoryDiagnostics, StderrDiagnostics};
pub use format::{LineFormatter, Target, format_message, join_parts};
pub use levels::{Category, Level, ParseVerbosityError, Verbosity};
pub use logger::{Logger, LoggerBuilder};
pub use logging_sink::{ConsoleSink, FileSink, MemoryConsole, SinkError, StdConsole, Stream};
pub use style::{category_style, paint};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing};

/// Tracing target used for diagnostics when the `tracing` feature is on.
pub const DIAGNOSTIC_TARGET: &str = "logging::diagnostic";
