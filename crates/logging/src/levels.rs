//! crates/logging/src/levels.rs
//! Message levels, the verbosity threshold and message categories.

use std::fmt;
use std::str::FromStr;

use logging_sink::Stream;
use thiserror::Error;

/// Verbosity level attached to every emitted message.
///
/// Levels are ordered by increasing verbosity and compare against
/// [`Verbosity`] through their ordinal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Always shown unless output is disabled entirely.
    Regular = 1,
    /// Shown when verbose output is requested.
    Verbose = 2,
    /// Shown only in debug mode.
    Debug = 3,
}

impl Level {
    /// Every level, least verbose first.
    pub const ALL: [Self; 3] = [Self::Regular, Self::Verbose, Self::Debug];

    /// Ordinal used for threshold comparisons.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global verbosity ceiling.
///
/// A message is eligible for output only when its [`Level`] ordinal does not
/// exceed the threshold's ordinal, so raising the threshold to `Debug` also
/// admits `Regular` and `Verbose` messages.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Verbosity {
    /// Nothing is eligible.
    None = 0,
    /// Regular messages only.
    #[default]
    Regular = 1,
    /// Regular and verbose messages.
    Verbose = 2,
    /// Everything.
    Debug = 3,
}

impl Verbosity {
    /// Ordinal used for threshold comparisons.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Reports whether a message at `level` passes this threshold.
    #[must_use]
    pub const fn admits(self, level: Level) -> bool {
        level.ordinal() <= self.ordinal()
    }

    /// Lowercase name of the threshold.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Regular => "regular",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a threshold name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid verbosity {value:?}: expected one of \"regular\", \"verbose\", \"debug\"")]
pub struct ParseVerbosityError {
    value: String,
}

impl ParseVerbosityError {
    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    /// Parses `regular`, `verbose` or `debug`. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "verbose" => Ok(Self::Verbose),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseVerbosityError {
                value: s.to_owned(),
            }),
        }
    }
}

/// Semantic tag of a message, independent of its level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// General information.
    Info,
    /// Something worth attention.
    Alert,
    /// A failure; always written to standard error on the console.
    Error,
    /// A side note.
    Notice,
    /// Progress of a unit of work.
    Task,
    /// Timing and benchmark output.
    Bench,
}

impl Category {
    /// Every category.
    pub const ALL: [Self; 6] = [
        Self::Info,
        Self::Alert,
        Self::Error,
        Self::Notice,
        Self::Task,
        Self::Bench,
    ];

    /// Console stream used for this category.
    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Error => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }

    /// Lowercase name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Alert => "alert",
            Self::Error => "error",
            Self::Notice => "notice",
            Self::Task => "task",
            Self::Bench => "bench",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
