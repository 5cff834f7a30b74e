#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `duolog` layers a process-wide default [`Logger`] over the `logging`
//! crate. Programs that prefer not to thread a logger through their call graph
//! use the free functions here; everything else can build and own a
//! [`Logger`] directly.
//!
//! The default instance is created with the default configuration on first
//! use. [`init`] installs a caller-built logger instead, provided nothing has
//! touched the default yet.
//!
//! # Examples
//!
//! ```
//! use duolog::{Level, Verbosity};
//!
//! duolog::set_verbosity(Verbosity::Verbose);
//! duolog::info(Level::Regular, format_args!("listening on {}", 8080));
//! duolog::task(Level::Verbose, format_args!("warming cache"));
//!
//! duolog::info!(duolog::global(), "macro form {}", 1);
//! ```

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

pub use logging::{
    Category, CategoryLabels, Clock, Config, ConsoleSink, DEFAULT_TIME_FORMAT, Diagnostic,
    DiagnosticHandler, FixedClock, Level, Logger, LoggerBuilder, MemoryConsole,
    MemoryDiagnostics, ParseVerbosityError, Route, RoutingMatrix, SinkError, StderrDiagnostics,
    StdConsole, Stream, SystemClock, Verbosity,
};
pub use logging::{alert, bench, error, info, log, logln, notice, task};
#[cfg(feature = "tracing")]
pub use logging::{LoggerLayer, init_tracing};

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide logger, creating a default one on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Installs `logger` as the process-wide logger.
///
/// # Errors
///
/// Returns `logger` back when a process-wide logger already exists, either
/// from an earlier `init` or from a call that created the default.
#[allow(clippy::result_large_err)]
pub fn init(logger: Logger) -> Result<&'static Logger, Logger> {
    GLOBAL.set(logger)?;
    Ok(global())
}

/// Emits a printf-style message through the process-wide logger.
pub fn emit(level: Level, category: Category, args: fmt::Arguments<'_>) {
    global().emit(level, category, args);
}

/// Emits the concatenation of `parts` through the process-wide logger.
pub fn emit_line(level: Level, category: Category, parts: &[&dyn fmt::Display]) {
    global().emit_line(level, category, parts);
}

macro_rules! forward_category {
    ($($(#[$doc:meta])* $name:ident, $line:ident => $category:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(level: Level, args: fmt::Arguments<'_>) {
                global().emit(level, Category::$category, args);
            }

            #[doc = concat!("Line-joined form of [`", stringify!($name), "`](fn@", stringify!($name), ").")]
            pub fn $line(level: Level, parts: &[&dyn fmt::Display]) {
                global().emit_line(level, Category::$category, parts);
            }
        )*
    };
}

forward_category! {
    /// Emits an info message.
    info, infoln => Info;
    /// Emits an alert.
    alert, alertln => Alert;
    /// Emits an error on standard error.
    error, errorln => Error;
    /// Emits a notice.
    notice, noticeln => Notice;
    /// Emits a task progress message.
    task, taskln => Task;
    /// Emits a benchmark message.
    bench, benchln => Bench;
}

/// Returns a copy of the process-wide configuration.
pub fn config() -> Config {
    global().config()
}

/// Flips the timestamp toggle.
pub fn toggle_timestamp() {
    global().toggle_timestamp();
}

/// Flips the category label toggle.
pub fn toggle_category_label() {
    global().toggle_category_label();
}

/// Flips the colour toggle.
pub fn toggle_color() {
    global().toggle_color();
}

/// Flips dual mode.
pub fn toggle_dual_mode() {
    global().toggle_dual_mode();
}

/// Closes every console gate, or reopens them all if none is open.
pub fn toggle_silent() {
    global().toggle_silent();
}

/// Sets the verbosity threshold.
pub fn set_verbosity(verbosity: Verbosity) {
    global().set_verbosity(verbosity);
}

/// Parses and sets the verbosity threshold, reporting unknown names.
pub fn set_verbosity_str(value: &str) {
    global().set_verbosity_str(value);
}

/// Parses and sets the verbosity threshold.
pub fn try_set_verbosity(value: &str) -> Result<(), ParseVerbosityError> {
    global().try_set_verbosity(value)
}

/// Sets the output file. An empty path unsets it.
pub fn set_output_file(path: impl Into<PathBuf>) {
    global().set_output_file(path);
}

/// Replaces the timestamp pattern.
pub fn set_time_format(pattern: impl Into<String>) {
    global().set_time_format(pattern);
}

/// Replaces the whole routing matrix from six gates, regular first.
pub fn set_routing(
    regular_console: bool,
    regular_file: bool,
    verbose_console: bool,
    verbose_file: bool,
    debug_console: bool,
    debug_file: bool,
) {
    global().set_routing(
        regular_console,
        regular_file,
        verbose_console,
        verbose_file,
        debug_console,
        debug_file,
    );
}

/// Replaces the route of one level.
pub fn set_level_routing(level: Level, console: bool, file: bool) {
    global().set_level_routing(level, console, file);
}

/// Opens the file gate of every level, if an output file is set.
pub fn start_file_output() {
    global().start_file_output();
}

/// Closes the file gate of every level.
pub fn stop_file_output() {
    global().stop_file_output();
}
