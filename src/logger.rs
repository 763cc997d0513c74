//! The tag-composing, debug-gated logger.

use std::error::Error as StdError;
use std::sync::Arc;

use crate::Result;
use crate::config::BuildConfig;
use crate::format::{self, Arg};
use crate::sink::{Level, LogFacade, Sink};

/// Conditional logger bound to one owning component
///
/// The effective tag is composed once at construction and never changes.
/// When the debug gate is closed every emission method is a no-op: no
/// formatting work, no sink write, at any level. The logger holds no other
/// state, so clones and concurrent callers need no coordination.
#[derive(Clone)]
pub struct Logger {
    tag: String,
    debug: bool,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Logger with a caller-supplied secondary label
    ///
    /// The effective tag is `"primary secondary"`; an empty label leaves it
    /// as `primary` alone.
    pub fn new(primary: &str, secondary: &str) -> Self {
        Self::build(primary, Some(secondary), true)
    }

    /// Logger whose secondary label is `T`'s short type name
    ///
    /// `Logger::for_type::<Parser>("App")` tags its lines `"App Parser"`,
    /// the same as `Logger::new("App", "Parser")`.
    pub fn for_type<T: ?Sized>(primary: &str) -> Self {
        Self::build(primary, Some(short_type_name::<T>()), true)
    }

    /// Logger whose debug gate comes from a build config
    ///
    /// Tag composition follows the same rules as [`Logger::new`]; the
    /// config's flag replaces the default-enabled gate.
    pub fn with_config(primary: &str, secondary: Option<&str>, config: &BuildConfig) -> Self {
        Self::build(primary, secondary, config.debug_enabled())
    }

    /// Replace the host sink (defaults to [`LogFacade`])
    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = sink;
        self
    }

    fn build(primary: &str, secondary: Option<&str>, debug: bool) -> Self {
        let tag = match secondary {
            Some(s) if !s.is_empty() => format!("{} {}", primary, s),
            _ => primary.to_string(),
        };
        Self {
            tag,
            debug,
            sink: Arc::new(LogFacade),
        }
    }

    /// The effective tag attached to every line
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the debug gate is open
    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Verbose log
    pub fn verbose(&self, template: &str, args: &[Arg<'_>]) -> Result<()> {
        self.emit(Level::Verbose, template, args)
    }

    /// Debug log
    pub fn debug(&self, template: &str, args: &[Arg<'_>]) -> Result<()> {
        self.emit(Level::Debug, template, args)
    }

    /// Info log
    pub fn info(&self, template: &str, args: &[Arg<'_>]) -> Result<()> {
        self.emit(Level::Info, template, args)
    }

    /// Warn log
    pub fn warn(&self, template: &str, args: &[Arg<'_>]) -> Result<()> {
        self.emit(Level::Warn, template, args)
    }

    /// Error log
    pub fn error(&self, template: &str, args: &[Arg<'_>]) -> Result<()> {
        self.emit(Level::Error, template, args)
    }

    /// Error log for a caught error value
    ///
    /// Writes one line holding the error's description and its `source()`
    /// chain.
    pub fn error_cause(&self, error: &dyn StdError) {
        if !self.debug {
            return;
        }
        self.sink.write(Level::Error, &self.tag, &render_cause(error));
    }

    /// Error log with both a message and the caught error
    ///
    /// Two sink writes: the formatted message, then the error's chain. A
    /// template mismatch fails before either write.
    pub fn error_with(
        &self,
        template: &str,
        args: &[Arg<'_>],
        error: &dyn StdError,
    ) -> Result<()> {
        if !self.debug {
            return Ok(());
        }
        let message = format::render(template, args)?;
        self.sink.write(Level::Error, &self.tag, &message);
        self.sink.write(Level::Error, &self.tag, &render_cause(error));
        Ok(())
    }

    fn emit(&self, level: Level, template: &str, args: &[Arg<'_>]) -> Result<()> {
        if !self.debug {
            return Ok(());
        }
        let message = format::render(template, args)?;
        self.sink.write(level, &self.tag, &message);
        Ok(())
    }
}

/// Render an error and its `source()` chain, one cause per line
fn render_cause(error: &dyn StdError) -> String {
    let mut out = error.to_string();
    let mut cause = error.source();
    while let Some(err) = cause {
        out.push_str(&format!("\nCaused by: {}", err));
        cause = err.source();
    }
    out
}

/// Unqualified name of `T`, with module path and generic parameters stripped
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
