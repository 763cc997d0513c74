//! Severity levels and the host sink boundary.

use std::fmt;

/// Log severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Finest-grained output
    Verbose,
    /// Diagnostic output
    Debug,
    /// Normal operational output
    Info,
    /// Something unexpected but recoverable
    Warn,
    /// A failure
    Error,
}

impl Level {
    /// Mapping onto the `log` facade
    ///
    /// The facade has no verbose level; `Verbose` lands on `Trace`, its
    /// below-debug severity, preserving relative ordering.
    pub fn to_log(self) -> log::Level {
        match self {
            Level::Verbose => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Verbose => "VERBOSE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Host logging sink
///
/// One call per log line, keyed by severity and the logger's effective tag.
/// Implementations are shared between threads and must tolerate concurrent
/// writers.
pub trait Sink: Send + Sync {
    /// Write one formatted line
    fn write(&self, level: Level, tag: &str, message: &str);
}

/// Default sink forwarding every line to the `log` facade
///
/// The effective tag travels as the record target, so facade backends can
/// filter on it the same way they filter on module paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl Sink for LogFacade {
    fn write(&self, level: Level, tag: &str, message: &str) {
        log::log!(target: tag, level.to_log(), "{}", message);
    }
}
