//! crates/logging/src/tracing_bridge.rs
//! Bridge from the tracing crate into a [`Logger`].
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that turns tracing events into
//! emit calls. The tracing level picks the message level and, for errors and
//! warnings, the category:
//!
//! | tracing | category          | level     |
//! |---------|-------------------|-----------|
//! | ERROR   | Error             | Regular   |
//! | WARN    | Alert             | Regular   |
//! | INFO    | from target       | Regular   |
//! | DEBUG   | from target       | Verbose   |
//! | TRACE   | from target       | Debug     |
//!
//! Target-derived categories look for a `task`, `bench`, `notice`/`note` or
//! `alert` path segment and fall back to Info.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{Logger, init_tracing};
//!
//! let logger = Arc::new(Logger::new());
//! init_tracing(Arc::clone(&logger))?;
//!
//! tracing::info!(target: "app::task", "indexing");
//! tracing::debug!(elapsed_ms = 12, "cache warmed");
//! ```

use std::fmt::{self, Write};
use std::sync::Arc;

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use super::levels::{Category, Level};
use super::logger::Logger;

/// A tracing layer that forwards events to a shared [`Logger`].
#[derive(Clone, Debug)]
pub struct LoggerLayer {
    logger: Arc<Logger>,
}

impl LoggerLayer {
    /// Creates a layer writing into `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    fn level_for(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR | tracing::Level::WARN | tracing::Level::INFO => Level::Regular,
            tracing::Level::DEBUG => Level::Verbose,
            tracing::Level::TRACE => Level::Debug,
        }
    }

    fn category_for(level: &tracing::Level, target: &str) -> Category {
        match *level {
            tracing::Level::ERROR => Category::Error,
            tracing::Level::WARN => Category::Alert,
            _ => Self::target_to_category(target),
        }
    }

    fn target_to_category(target: &str) -> Category {
        // Match whole path segments so "taskforce" is not a task.
        target
            .split("::")
            .find_map(|segment| match segment {
                "task" => Some(Category::Task),
                "bench" => Some(Category::Bench),
                "notice" | "note" => Some(Category::Notice),
                "alert" => Some(Category::Alert),
                _ => None,
            })
            .unwrap_or(Category::Info)
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // The logger reports its own diagnostics through tracing.
        if target == crate::DIAGNOSTIC_TARGET {
            return;
        }

        let level = Self::level_for(metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let category = Self::category_for(metadata.level(), target);
        self.logger
            .emit(level, category, format_args!("{}", visitor.finish()));
    }
}

/// Collects the `message` field and renders the rest as ` key=value`.
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
}

impl EventVisitor {
    fn finish(mut self) -> String {
        self.message.push_str(&self.fields);
        self.message
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        // Writing into a String cannot fail.
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Installs a global tracing subscriber that forwards every event to `logger`.
///
/// # Errors
///
/// Fails when a global subscriber has already been set.
pub fn init_tracing(logger: Arc<Logger>) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .try_init()
}
