//! crates/logging/src/format.rs
//! Line rendering: timestamp, category label, colour and message body.
//!
//! A rendered line has the shape `[timestamp\t][label: ]message\n`, where each
//! bracketed segment appears only when its toggle is on. Console lines may
//! carry a coloured label; file lines never do.

use std::fmt::{self, Write};

use chrono::{DateTime, Local};

use super::clock::render_timestamp;
use super::config::Config;
use super::levels::Category;
use super::style::paint;

/// Destination a line is rendered for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Console output; the label is coloured when colour is enabled.
    Console,
    /// File output; the label is always plain.
    File,
}

/// Renders lines for one emit call.
///
/// The timestamp is captured once at construction so the console and file
/// variants of the same message carry identical times.
#[derive(Debug)]
pub struct LineFormatter<'a> {
    config: &'a Config,
    timestamp: Option<String>,
}

impl<'a> LineFormatter<'a> {
    /// Prepares a formatter for `config`, stamping lines with `now`.
    #[must_use]
    pub fn new(config: &'a Config, now: &DateTime<Local>) -> Self {
        let timestamp = config
            .timestamp()
            .then(|| render_timestamp(now, config.time_format()));
        Self { config, timestamp }
    }

    /// Renders `message` for `category` and `target`, ending with a newline.
    #[must_use]
    pub fn render(&self, category: Category, target: Target, message: &str) -> String {
        let mut line = String::with_capacity(message.len() + 40);

        if let Some(timestamp) = &self.timestamp {
            line.push_str(timestamp);
            line.push('\t');
        }

        if self.config.category_label() {
            let label = self.config.labels().get(category);
            if target == Target::Console && self.config.color() {
                line.push_str(&paint(label, category));
            } else {
                line.push_str(label);
            }
            line.push_str(": ");
        }

        line.push_str(message);
        line.push('\n');
        line
    }
}

/// Renders printf-style arguments into a message body.
#[must_use]
pub fn format_message(args: fmt::Arguments<'_>) -> String {
    fmt::format(args)
}

/// Concatenates the `Display` output of each part with no separator.
#[must_use]
pub fn join_parts(parts: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for part in parts {
        // Writing into a String cannot fail.
        let _ = write!(out, "{part}");
    }
    out
}
