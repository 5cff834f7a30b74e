//! crates/logging/src/logger.rs
//! The dispatcher: decides per call whether a message reaches the console,
//! the file, both, or nothing.
//!
//! # Routing
//!
//! 1. A message whose level exceeds the verbosity threshold is dropped before
//!    any formatting happens. The threshold is a global ceiling and applies to
//!    file routing too.
//! 2. The routing matrix supplies independent console and file gates for the
//!    message's level.
//! 3. When the file gate is open the plain line is appended under the file
//!    lock. Failures become diagnostics and never stop the console write.
//! 4. The console gets the line when its gate is open, or when the file gate
//!    is open and dual mode is on. Error messages go to standard error.

use std::fmt;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use logging_sink::{ConsoleSink, FileSink, StdConsole};

use super::clock::{Clock, SystemClock};
use super::config::{Config, RoutingMatrix};
use super::diagnostics::{Diagnostic, DiagnosticHandler, StderrDiagnostics};
use super::format::{LineFormatter, Target, format_message, join_parts};
use super::levels::{Category, Level, ParseVerbosityError, Verbosity};

/// Leveled, category-tagged logger with console and file destinations.
///
/// All methods take `&self`; share a logger between threads with
/// [`Arc`](std::sync::Arc). Configuration reads are not linearizable with
/// concurrent mutation, but file appends are strictly serialized.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{Category, Level, Logger, MemoryConsole};
///
/// let console = Arc::new(MemoryConsole::new());
/// let logger = Logger::builder().console(Arc::clone(&console)).build();
/// logger.toggle_timestamp();
/// logger.toggle_color();
///
/// logger.emit(Level::Regular, Category::Info, format_args!("hello {}", "world"));
/// logger.emit(Level::Debug, Category::Info, format_args!("hidden"));
///
/// assert_eq!(console.stdout(), "[INFO]: hello world\n");
/// ```
pub struct Logger {
    config: RwLock<Config>,
    console: Box<dyn ConsoleSink>,
    file: FileSink,
    clock: Box<dyn Clock>,
    diagnostics: Box<dyn DiagnosticHandler>,
}

/// Lines prepared under the config read lock, written after it is released.
struct Prepared {
    file: Option<(PathBuf, String)>,
    console: Option<String>,
}

impl Logger {
    /// Creates a logger with the default configuration writing to the
    /// process streams.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a logger with `config` writing to the process streams.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self::builder().config(config).build()
    }

    /// Starts a [`LoggerBuilder`] for swapping sinks, clock or diagnostics.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    // ------------------------------------------------------------------
    // Emit operations
    // ------------------------------------------------------------------

    /// Reports whether `level` passes the current verbosity threshold.
    ///
    /// Passing the threshold does not imply output; the routing matrix may
    /// still close both gates.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.read_config().verbosity().admits(level)
    }

    /// Emits a printf-style message.
    pub fn emit(&self, level: Level, category: Category, args: fmt::Arguments<'_>) {
        self.dispatch(level, category, || format_message(args));
    }

    /// Emits the concatenation of `parts`.
    pub fn emit_line(&self, level: Level, category: Category, parts: &[&dyn fmt::Display]) {
        self.dispatch(level, category, || join_parts(parts));
    }

    fn dispatch(&self, level: Level, category: Category, message: impl FnOnce() -> String) {
        let Some(prepared) = self.prepare(level, category, message) else {
            return;
        };

        if let Some((path, line)) = prepared.file {
            if let Err(err) = self.file.append(&path, &line) {
                self.report(&Diagnostic::FileSink(err));
            }
        }

        if let Some(line) = prepared.console {
            if let Err(err) = self.console.write(category.stream(), &line) {
                self.report(&Diagnostic::ConsoleSink(err));
            }
        }
    }

    fn prepare(
        &self,
        level: Level,
        category: Category,
        message: impl FnOnce() -> String,
    ) -> Option<Prepared> {
        // The guard must be released before running caller formatting code,
        // which may log through this logger again.
        let (to_file, to_console, config) = {
            let config = self.read_config();
            if !config.verbosity().admits(level) {
                return None;
            }

            let route = config.routing().get(level);
            let to_console = route.console || (route.file && config.dual_mode());
            if !route.file && !to_console {
                return None;
            }
            (route.file, to_console, config.clone())
        };

        let message = message();
        let formatter = LineFormatter::new(&config, &self.clock.now());
        let file = to_file.then(|| {
            (
                config.output_file().to_path_buf(),
                formatter.render(category, Target::File, &message),
            )
        });
        let console = to_console.then(|| formatter.render(category, Target::Console, &message));
        Some(Prepared { file, console })
    }

    // ------------------------------------------------------------------
    // Per-category helpers
    // ------------------------------------------------------------------

    /// Emits an [`Category::Info`] message.
    pub fn info(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, Category::Info, args);
    }

    /// Emits an [`Category::Alert`] message.
    pub fn alert(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, Category::Alert, args);
    }

    /// Emits an [`Category::Error`] message.
    pub fn error(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, Category::Error, args);
    }

    /// Emits a [`Category::Notice`] message.
    pub fn notice(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, Category::Notice, args);
    }

    /// Emits a [`Category::Task`] message.
    pub fn task(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, Category::Task, args);
    }

    /// Emits a [`Category::Bench`] message.
    pub fn bench(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, Category::Bench, args);
    }

    /// Line-joined [`Category::Info`] message.
    pub fn infoln(&self, level: Level, parts: &[&dyn fmt::Display]) {
        self.emit_line(level, Category::Info, parts);
    }

    /// Line-joined [`Category::Alert`] message.
    pub fn alertln(&self, level: Level, parts: &[&dyn fmt::Display]) {
        self.emit_line(level, Category::Alert, parts);
    }

    /// Line-joined [`Category::Error`] message.
    pub fn errorln(&self, level: Level, parts: &[&dyn fmt::Display]) {
        self.emit_line(level, Category::Error, parts);
    }

    /// Line-joined [`Category::Notice`] message.
    pub fn noticeln(&self, level: Level, parts: &[&dyn fmt::Display]) {
        self.emit_line(level, Category::Notice, parts);
    }

    /// Line-joined [`Category::Task`] message.
    pub fn taskln(&self, level: Level, parts: &[&dyn fmt::Display]) {
        self.emit_line(level, Category::Task, parts);
    }

    /// Line-joined [`Category::Bench`] message.
    pub fn benchln(&self, level: Level, parts: &[&dyn fmt::Display]) {
        self.emit_line(level, Category::Bench, parts);
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Returns a copy of the current configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        self.read_config().clone()
    }

    /// Applies `f` to the configuration under the write lock.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut Config) -> R) -> R {
        f(&mut *self.write_config())
    }

    /// Flips the timestamp toggle.
    pub fn toggle_timestamp(&self) {
        self.update(Config::toggle_timestamp);
    }

    /// Flips the category label toggle.
    pub fn toggle_category_label(&self) {
        self.update(Config::toggle_category_label);
    }

    /// Flips the colour toggle.
    pub fn toggle_color(&self) {
        self.update(Config::toggle_color);
    }

    /// Flips dual mode.
    pub fn toggle_dual_mode(&self) {
        self.update(Config::toggle_dual_mode);
    }

    /// Closes every console gate, or reopens them all if none is open.
    ///
    /// File gates are left as they are.
    pub fn toggle_silent(&self) {
        self.update(|config| {
            let mut routing = config.routing();
            let silence = routing.any_console();
            routing.set_all_console(!silence);
            config.set_routing(routing);
        });
    }

    /// Sets the verbosity threshold.
    pub fn set_verbosity(&self, verbosity: Verbosity) {
        self.update(|config| config.set_verbosity(verbosity));
    }

    /// Parses and sets the verbosity threshold.
    pub fn try_set_verbosity(&self, value: &str) -> Result<(), ParseVerbosityError> {
        let verbosity = value.parse::<Verbosity>()?;
        self.set_verbosity(verbosity);
        Ok(())
    }

    /// Parses and sets the verbosity threshold, reporting unknown names as a
    /// diagnostic and leaving the threshold unchanged.
    pub fn set_verbosity_str(&self, value: &str) {
        if let Err(err) = self.try_set_verbosity(value) {
            self.report(&Diagnostic::InvalidVerbosity {
                value: err.value().to_owned(),
            });
        }
    }

    /// Sets the output file. An empty path unsets it.
    pub fn set_output_file(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.update(|config| config.set_output_file(path));
    }

    /// Replaces the timestamp pattern (strftime syntax).
    pub fn set_time_format(&self, pattern: impl Into<String>) {
        let pattern = pattern.into();
        self.update(|config| config.set_time_format(pattern));
    }

    /// Replaces the whole routing matrix from six gates, regular first.
    pub fn set_routing(
        &self,
        regular_console: bool,
        regular_file: bool,
        verbose_console: bool,
        verbose_file: bool,
        debug_console: bool,
        debug_file: bool,
    ) {
        self.set_routing_matrix(RoutingMatrix::new(
            regular_console,
            regular_file,
            verbose_console,
            verbose_file,
            debug_console,
            debug_file,
        ));
    }

    /// Replaces the whole routing matrix.
    pub fn set_routing_matrix(&self, routing: RoutingMatrix) {
        self.update(|config| config.set_routing(routing));
    }

    /// Replaces the route of one level.
    pub fn set_level_routing(&self, level: Level, console: bool, file: bool) {
        self.update(|config| config.set_level_routing(level, console, file));
    }

    /// Replaces the route of regular messages.
    pub fn set_regular_routing(&self, console: bool, file: bool) {
        self.set_level_routing(Level::Regular, console, file);
    }

    /// Replaces the route of verbose messages.
    pub fn set_verbose_routing(&self, console: bool, file: bool) {
        self.set_level_routing(Level::Verbose, console, file);
    }

    /// Replaces the route of debug messages.
    pub fn set_debug_routing(&self, console: bool, file: bool) {
        self.set_level_routing(Level::Debug, console, file);
    }

    /// Opens the file gate of every level.
    ///
    /// Without a configured output file this reports a diagnostic and changes
    /// nothing.
    pub fn start_file_output(&self) {
        let started = self.update(|config| {
            if !config.has_output_file() {
                return false;
            }
            let mut routing = config.routing();
            routing.set_all_file(true);
            config.set_routing(routing);
            true
        });
        if !started {
            self.report(&Diagnostic::FileOutputWithoutPath);
        }
    }

    /// Closes the file gate of every level.
    pub fn stop_file_output(&self) {
        self.update(|config| {
            let mut routing = config.routing();
            routing.set_all_file(false);
            config.set_routing(routing);
        });
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn read_config(&self) -> RwLockReadGuard<'_, Config> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_config(&self) -> RwLockWriteGuard<'_, Config> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn report(&self, diagnostic: &Diagnostic) {
        #[cfg(feature = "tracing")]
        tracing::warn!(target: crate::DIAGNOSTIC_TARGET, "{diagnostic}");
        self.diagnostics.report(diagnostic);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*self.read_config())
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Logger`] with non-default parts.
pub struct LoggerBuilder {
    config: Config,
    console: Box<dyn ConsoleSink>,
    clock: Box<dyn Clock>,
    diagnostics: Box<dyn DiagnosticHandler>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            config: Config::default(),
            console: Box::new(StdConsole),
            clock: Box::new(SystemClock),
            diagnostics: Box::new(StderrDiagnostics),
        }
    }
}

impl LoggerBuilder {
    /// Uses `config` as the initial configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sends console lines to `console`.
    #[must_use]
    pub fn console(mut self, console: impl ConsoleSink + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    /// Reads timestamps from `clock`.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Sends diagnostics to `handler`.
    #[must_use]
    pub fn diagnostics(mut self, handler: impl DiagnosticHandler + 'static) -> Self {
        self.diagnostics = Box::new(handler);
        self
    }

    /// Builds the logger.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            config: RwLock::new(self.config),
            console: self.console,
            file: FileSink::new(),
            clock: self.clock,
            diagnostics: self.diagnostics,
        }
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedClock, MemoryDiagnostics};
    use chrono::{Local, TimeZone};
    use logging_sink::MemoryConsole;
    use std::sync::Arc;

    struct Harness {
        logger: Logger,
        console: Arc<MemoryConsole>,
        diagnostics: Arc<MemoryDiagnostics>,
    }

    fn harness() -> Harness {
        let console = Arc::new(MemoryConsole::new());
        let diagnostics = Arc::new(MemoryDiagnostics::new());
        let logger = Logger::builder()
            .console(Arc::clone(&console))
            .diagnostics(Arc::clone(&diagnostics))
            .clock(FixedClock(Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()))
            .build();
        Harness {
            logger,
            console,
            diagnostics,
        }
    }

    #[test]
    fn default_scenario_prints_regular_info() {
        let h = harness();
        h.logger.toggle_color();
        h.logger
            .emit(Level::Regular, Category::Info, format_args!("hello {}", "world"));

        assert_eq!(h.console.stdout(), "2024-01-02 03:04:05\t[INFO]: hello world\n");
        assert!(h.console.stderr().is_empty());
    }

    #[test]
    fn debug_message_is_dropped_at_regular_threshold() {
        let h = harness();
        h.logger.emit(Level::Debug, Category::Info, format_args!("hidden"));
        assert!(h.console.is_empty());
    }

    #[test]
    fn formatting_is_skipped_when_dropped() {
        let h = harness();
        let mut called = false;
        h.logger.dispatch(Level::Verbose, Category::Info, || {
            called = true;
            String::new()
        });
        assert!(!called);
    }

    #[test]
    fn enabled_follows_threshold() {
        let h = harness();
        assert!(h.logger.enabled(Level::Regular));
        assert!(!h.logger.enabled(Level::Verbose));

        h.logger.set_verbosity(Verbosity::None);
        assert!(!h.logger.enabled(Level::Regular));
    }

    #[test]
    fn error_category_uses_stderr() {
        let h = harness();
        h.logger.toggle_timestamp();
        h.logger.toggle_color();
        h.logger.error(Level::Regular, format_args!("bad"));
        assert_eq!(h.console.stderr(), "[ERROR]: bad\n");
        assert!(h.console.stdout().is_empty());
    }

    #[test]
    fn invalid_verbosity_keeps_threshold() {
        let h = harness();
        h.logger.set_verbosity_str("debug");
        h.logger.set_verbosity_str("LOUD");

        assert_eq!(h.logger.config().verbosity(), Verbosity::Debug);
        let entries = h.diagnostics.drain();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("LOUD"));
    }

    #[test]
    fn try_set_verbosity_returns_error() {
        let h = harness();
        let err = h.logger.try_set_verbosity("Verbose").unwrap_err();
        assert_eq!(err.value(), "Verbose");
        assert!(h.diagnostics.is_empty());
    }

    #[test]
    fn start_file_output_without_path_is_noop() {
        let h = harness();
        let before = h.logger.config();
        h.logger.start_file_output();

        assert_eq!(h.logger.config(), before);
        assert_eq!(h.diagnostics.len(), 1);
    }

    #[test]
    fn start_and_stop_file_output() {
        let h = harness();
        h.logger.set_output_file("app.log");
        h.logger.start_file_output();
        for level in Level::ALL {
            assert!(h.logger.config().routing().get(level).file);
            assert!(h.logger.config().routing().get(level).console);
        }

        h.logger.stop_file_output();
        for level in Level::ALL {
            assert!(!h.logger.config().routing().get(level).file);
        }
        assert!(h.diagnostics.is_empty());
    }

    #[test]
    fn toggle_silent_round_trip() {
        let h = harness();
        h.logger.toggle_silent();
        h.logger.info(Level::Regular, format_args!("quiet"));
        assert!(h.console.is_empty());

        h.logger.toggle_silent();
        h.logger.info(Level::Regular, format_args!("loud"));
        assert!(h.console.stdout().ends_with("loud\n"));
    }

    #[test]
    fn named_level_routing_setters() {
        let h = harness();
        h.logger.set_regular_routing(false, true);
        h.logger.set_verbose_routing(true, true);
        h.logger.set_debug_routing(false, false);

        let routing = h.logger.config().routing();
        assert_eq!(routing, RoutingMatrix::new(false, true, true, true, false, false));
    }

    #[test]
    fn update_returns_closure_value() {
        let h = harness();
        let verbosity = h.logger.update(|config| {
            config.set_verbosity(Verbosity::Verbose);
            config.verbosity()
        });
        assert_eq!(verbosity, Verbosity::Verbose);
    }

    #[test]
    fn debug_output_shows_config() {
        let text = format!("{:?}", Logger::new());
        assert!(text.starts_with("Logger"));
        assert!(text.contains("verbosity"));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use std::sync::Mutex;
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<(String, tracing::Level)>>>);

        impl<S: tracing::Subscriber> Layer<S> for Captured {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                let metadata = event.metadata();
                self.0
                    .lock()
                    .unwrap()
                    .push((metadata.target().to_owned(), *metadata.level()));
            }
        }

        #[test]
        fn failed_append_emits_one_warning() {
            let dir = tempfile::tempdir().unwrap();
            let h = harness();
            h.logger
                .set_output_file(dir.path().join("missing").join("app.log"));
            h.logger.set_regular_routing(false, true);

            let captured = Captured::default();
            let subscriber = tracing_subscriber::registry().with(captured.clone());
            tracing::subscriber::with_default(subscriber, || {
                h.logger.info(Level::Regular, format_args!("lost"));
            });

            let events = captured.0.lock().unwrap();
            assert_eq!(
                events.as_slice(),
                &[(crate::DIAGNOSTIC_TARGET.to_owned(), tracing::Level::WARN)]
            );
            assert_eq!(h.diagnostics.len(), 1);
        }
    }
}
