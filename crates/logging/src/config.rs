//! crates/logging/src/config.rs
//! Formatting toggles, verbosity threshold and the per-level routing matrix.

use std::path::{Path, PathBuf};

use super::levels::{Category, Level, Verbosity};

/// Default timestamp pattern (`YYYY-MM-DD HH:mm:ss`) in strftime syntax.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Console and file gates for one level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Emit to the console.
    pub console: bool,
    /// Append to the output file.
    pub file: bool,
}

impl Route {
    /// Creates a route from its two gates.
    #[must_use]
    pub const fn new(console: bool, file: bool) -> Self {
        Self { console, file }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// Independent console/file gates for each [`Level`].
///
/// Unlike the verbosity threshold, no ordering is implied between levels:
/// enabling the debug file gate says nothing about the regular one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingMatrix {
    /// Route for regular messages.
    pub regular: Route,
    /// Route for verbose messages.
    pub verbose: Route,
    /// Route for debug messages.
    pub debug: Route,
}

impl RoutingMatrix {
    /// Builds a matrix from the six gates, regular first.
    #[must_use]
    pub const fn new(
        regular_console: bool,
        regular_file: bool,
        verbose_console: bool,
        verbose_file: bool,
        debug_console: bool,
        debug_file: bool,
    ) -> Self {
        Self {
            regular: Route::new(regular_console, regular_file),
            verbose: Route::new(verbose_console, verbose_file),
            debug: Route::new(debug_console, debug_file),
        }
    }

    /// Route for `level`.
    #[must_use]
    pub const fn get(&self, level: Level) -> Route {
        match level {
            Level::Regular => self.regular,
            Level::Verbose => self.verbose,
            Level::Debug => self.debug,
        }
    }

    /// Replaces the route for `level`.
    pub fn set(&mut self, level: Level, route: Route) {
        match level {
            Level::Regular => self.regular = route,
            Level::Verbose => self.verbose = route,
            Level::Debug => self.debug = route,
        }
    }

    /// Sets the console gate of every level.
    pub fn set_all_console(&mut self, enabled: bool) {
        for level in Level::ALL {
            let mut route = self.get(level);
            route.console = enabled;
            self.set(level, route);
        }
    }

    /// Sets the file gate of every level.
    pub fn set_all_file(&mut self, enabled: bool) {
        for level in Level::ALL {
            let mut route = self.get(level);
            route.file = enabled;
            self.set(level, route);
        }
    }

    /// Reports whether any level has its console gate open.
    #[must_use]
    pub fn any_console(&self) -> bool {
        Level::ALL.iter().any(|&level| self.get(level).console)
    }
}

/// Label text printed in front of each category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryLabels {
    /// Label for [`Category::Info`].
    pub info: String,
    /// Label for [`Category::Alert`].
    pub alert: String,
    /// Label for [`Category::Error`].
    pub error: String,
    /// Label for [`Category::Notice`].
    pub notice: String,
    /// Label for [`Category::Task`].
    pub task: String,
    /// Label for [`Category::Bench`].
    pub bench: String,
}

impl CategoryLabels {
    /// Label text for `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Info => &self.info,
            Category::Alert => &self.alert,
            Category::Error => &self.error,
            Category::Notice => &self.notice,
            Category::Task => &self.task,
            Category::Bench => &self.bench,
        }
    }
}

impl Default for CategoryLabels {
    fn default() -> Self {
        Self {
            info: "[INFO]".to_owned(),
            alert: "[ALERT]".to_owned(),
            error: "[ERROR]".to_owned(),
            notice: "[NOTE]".to_owned(),
            task: "[TASK]".to_owned(),
            bench: "[BENCH]".to_owned(),
        }
    }
}

/// Complete logger configuration.
///
/// `Config` is plain data. The [`Logger`](crate::Logger) owns one instance and
/// exposes the mutators below through `&self` methods; a `Config` can also be
/// built up front and handed to [`Logger::with_config`](crate::Logger::with_config).
/// Category labels can only be chosen at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    timestamp: bool,
    category_label: bool,
    color: bool,
    dual_mode: bool,
    verbosity: Verbosity,
    routing: RoutingMatrix,
    output_file: PathBuf,
    time_format: String,
    labels: CategoryLabels,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_labels(CategoryLabels::default())
    }
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default configuration with custom category labels.
    #[must_use]
    pub fn with_labels(labels: CategoryLabels) -> Self {
        Self {
            timestamp: true,
            category_label: true,
            color: true,
            dual_mode: false,
            verbosity: Verbosity::Regular,
            routing: RoutingMatrix::default(),
            output_file: PathBuf::new(),
            time_format: DEFAULT_TIME_FORMAT.to_owned(),
            labels,
        }
    }

    /// Whether lines start with a timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> bool {
        self.timestamp
    }

    /// Whether lines carry the category label.
    #[must_use]
    pub const fn category_label(&self) -> bool {
        self.category_label
    }

    /// Whether console labels are colourised.
    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }

    /// Whether file-routed messages are mirrored to the console.
    #[must_use]
    pub const fn dual_mode(&self) -> bool {
        self.dual_mode
    }

    /// Current verbosity threshold.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Current routing matrix.
    #[must_use]
    pub const fn routing(&self) -> RoutingMatrix {
        self.routing
    }

    /// Configured output file; empty when unset.
    #[must_use]
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Reports whether an output file has been configured.
    #[must_use]
    pub fn has_output_file(&self) -> bool {
        !self.output_file.as_os_str().is_empty()
    }

    /// Timestamp pattern in strftime syntax.
    #[must_use]
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Category labels fixed at construction.
    #[must_use]
    pub const fn labels(&self) -> &CategoryLabels {
        &self.labels
    }

    /// Flips the timestamp toggle.
    pub fn toggle_timestamp(&mut self) {
        self.timestamp = !self.timestamp;
    }

    /// Flips the category label toggle.
    pub fn toggle_category_label(&mut self) {
        self.category_label = !self.category_label;
    }

    /// Flips the colour toggle.
    pub fn toggle_color(&mut self) {
        self.color = !self.color;
    }

    /// Flips dual mode.
    pub fn toggle_dual_mode(&mut self) {
        self.dual_mode = !self.dual_mode;
    }

    /// Sets the verbosity threshold.
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Sets the output file. An empty path unsets it.
    pub fn set_output_file(&mut self, path: impl Into<PathBuf>) {
        self.output_file = path.into();
    }

    /// Replaces the timestamp pattern.
    pub fn set_time_format(&mut self, pattern: impl Into<String>) {
        self.time_format = pattern.into();
    }

    /// Replaces the whole routing matrix.
    pub fn set_routing(&mut self, routing: RoutingMatrix) {
        self.routing = routing;
    }

    /// Replaces the route of a single level.
    pub fn set_level_routing(&mut self, level: Level, console: bool, file: bool) {
        self.routing.set(level, Route::new(console, file));
    }
}
