//! crates/logging/src/macros.rs
//! Emit macros over [`Logger`](crate::Logger).
//!
//! Every macro takes the logger as its first argument, so the same macros work
//! with a local logger, an `Arc<Logger>`, or a process-wide instance.

/// Emits a printf-style message with an explicit category and level.
///
/// # Example
/// ```
/// use logging::{Category, Level, Logger, MemoryConsole};
/// use std::sync::Arc;
///
/// let console = Arc::new(MemoryConsole::new());
/// let logger = Logger::builder().console(Arc::clone(&console)).build();
/// logger.toggle_timestamp();
/// logger.toggle_color();
///
/// logging::log!(logger, Category::Task, Level::Regular, "step {} of {}", 1, 3);
/// assert_eq!(console.stdout(), "[TASK]: step 1 of 3\n");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $category:expr, $level:expr, $($arg:tt)+) => {
        $logger.emit($level, $category, ::core::format_args!($($arg)+))
    };
}

/// Emits the concatenation of the given values with an explicit category and
/// level.
///
/// # Example
/// ```
/// use logging::{Category, Level, Logger, MemoryConsole};
/// use std::sync::Arc;
///
/// let console = Arc::new(MemoryConsole::new());
/// let logger = Logger::builder().console(Arc::clone(&console)).build();
/// logger.toggle_timestamp();
/// logger.toggle_category_label();
///
/// logging::logln!(logger, Category::Info, Level::Regular; "took ", 12, "ms");
/// assert_eq!(console.stdout(), "took 12ms\n");
/// ```
#[macro_export]
macro_rules! logln {
    ($logger:expr, $category:expr, $level:expr; $($part:expr),* $(,)?) => {
        $logger.emit_line(
            $level,
            $category,
            &[$(&$part as &dyn ::core::fmt::Display),*],
        )
    };
}

/// Emits an info message, at `Regular` unless a level is given with `=>`.
///
/// # Example
/// ```ignore
/// logging::info!(logger, "listening on {}", addr);
/// logging::info!(logger, Level::Verbose => "accepted {}", peer);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $level:expr => $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Info, $level, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Info, $crate::Level::Regular, $($arg)+)
    };
}

/// Emits an alert message, at `Regular` unless a level is given with `=>`.
///
/// # Example
/// ```ignore
/// logging::alert!(logger, "disk {}% full", pct);
/// ```
#[macro_export]
macro_rules! alert {
    ($logger:expr, $level:expr => $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Alert, $level, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Alert, $crate::Level::Regular, $($arg)+)
    };
}

/// Emits an error message to standard error, at `Regular` unless a level is
/// given with `=>`.
///
/// # Example
/// ```ignore
/// logging::error!(logger, "cannot open {}: {}", path.display(), err);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $level:expr => $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Error, $level, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Error, $crate::Level::Regular, $($arg)+)
    };
}

/// Emits a notice, at `Regular` unless a level is given with `=>`.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $level:expr => $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Notice, $level, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Notice, $crate::Level::Regular, $($arg)+)
    };
}

/// Emits a task message, at `Regular` unless a level is given with `=>`.
#[macro_export]
macro_rules! task {
    ($logger:expr, $level:expr => $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Task, $level, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Task, $crate::Level::Regular, $($arg)+)
    };
}

/// Emits a benchmark message, at `Regular` unless a level is given with `=>`.
///
/// # Example
/// ```ignore
/// logging::bench!(logger, Level::Debug => "hash took {:?}", elapsed);
/// ```
#[macro_export]
macro_rules! bench {
    ($logger:expr, $level:expr => $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Bench, $level, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::Bench, $crate::Level::Regular, $($arg)+)
    };
}
