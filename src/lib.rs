//! Tag-scoped conditional logging on top of the `log` facade.
//!
//! This library provides a small [`Logger`] that composes a two-part tag at
//! construction, gates every emission on a debug flag, renders printf-style
//! message templates, and forwards each line to a host-provided [`Sink`].

use std::error::Error as StdError;
use std::fmt;

pub mod config;
pub mod format;
pub mod logger;
pub mod sink;

// Re-export key types
pub use config::BuildConfig;
pub use format::Arg;
pub use logger::Logger;
pub use sink::{Level, LogFacade, Sink};

/// Custom error type for the library
///
/// Every variant is a template/argument mismatch reported by
/// [`format::render`]; nothing else in the crate can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The template consumed more arguments than were supplied
    MissingArgument {
        /// Conversion character that had no argument left
        spec: char,
        /// Zero-based position of the missing argument
        index: usize,
    },
    /// An argument did not match the kind its placeholder requires
    ArgumentType {
        /// Conversion character that rejected the argument
        spec: char,
        /// Zero-based position of the offending argument
        index: usize,
        /// Kind of the argument actually supplied
        found: &'static str,
    },
    /// Conversion character the formatter does not support
    UnknownSpecifier(char),
    /// The template ended in the middle of a `%` specifier
    UnterminatedSpecifier,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingArgument { spec, index } => {
                write!(f, "missing argument {} for specifier %{}", index, spec)
            }
            Error::ArgumentType { spec, index, found } => {
                write!(f, "argument {} is a {}, not valid for %{}", index, found, spec)
            }
            Error::UnknownSpecifier(spec) => write!(f, "unknown format specifier %{}", spec),
            Error::UnterminatedSpecifier => write!(f, "template ends with a bare %"),
        }
    }
}

impl StdError for Error {}

/// Type alias for library results
pub type Result<T> = std::result::Result<T, Error>;
