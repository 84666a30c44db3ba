//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    format::{LineFormat, INVALID_LEVEL_DIAGNOSTIC},
    log_level::{LogLevel, Severity},
    timestamp,
};
use crate::sinks::{self, BoxedSink};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

/// Leveled logger writing one line per event to a sink.
///
/// Every emission call holds the sink lock from filtering through the final
/// flush, so concurrent calls on one `Logger` never interleave their lines.
/// Two loggers sharing the same underlying stream get no such guarantee.
///
/// # Example
///
/// ```
/// use picolog::{LogLevel, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::with_sink("svc/x", LogLevel::Info, false, sink.clone());
///
/// logger.log(LogLevel::Warning, "disk low").unwrap();
///
/// let line = &sink.lines()[0];
/// assert!(line.starts_with("[WARNING] - "));
/// assert!(line.ends_with(" : disk low - At package: svc/x"));
/// ```
pub struct Logger {
    origin: String,
    min_severity: Severity,
    use_colors: AtomicBool,
    sink: Mutex<BoxedSink>,
}

impl Logger {
    /// Create a logger writing to standard output.
    ///
    /// Neither `origin` nor `min_severity` is validated; an out-of-range
    /// minimum is accepted here and only matters at emission time.
    #[must_use]
    pub fn new(origin: impl Into<String>, min_severity: impl Into<Severity>, use_colors: bool) -> Self {
        Self::from_parts(origin.into(), min_severity.into(), use_colors, sinks::stdout())
    }

    /// Create a logger writing to `sink`.
    #[must_use]
    pub fn with_sink<W>(
        origin: impl Into<String>,
        min_severity: impl Into<Severity>,
        use_colors: bool,
        sink: W,
    ) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_parts(origin.into(), min_severity.into(), use_colors, Box::new(sink))
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn from_parts(origin: String, min_severity: Severity, use_colors: bool, sink: BoxedSink) -> Self {
        Self {
            origin,
            min_severity,
            use_colors: AtomicBool::new(use_colors),
            sink: Mutex::new(sink),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    pub fn colors_enabled(&self) -> bool {
        self.use_colors.load(Ordering::Relaxed)
    }

    /// Turn colored output on or off for subsequent calls.
    pub fn set_colors(&self, enabled: bool) {
        self.use_colors.store(enabled, Ordering::Relaxed);
    }

    /// Log `message` at `severity`.
    ///
    /// Messages ranked below the configured minimum are dropped silently.
    /// A severity outside the five known levels is reported with a
    /// diagnostic line and logged as `INFO`.
    pub fn log(&self, severity: impl Into<Severity>, message: impl AsRef<str>) -> Result<()> {
        self.emit(severity.into(), message.as_ref(), &[])
    }

    /// Log `message` once for every present error, with the error's text
    /// after the message. `None` entries are skipped; if nothing is left a
    /// single plain line is written.
    ///
    /// ```
    /// use picolog::{LogLevel, Logger, MemorySink};
    /// use std::io;
    ///
    /// let sink = MemorySink::new();
    /// let logger = Logger::with_sink("db", LogLevel::Info, false, sink.clone());
    /// let timeout = io::Error::new(io::ErrorKind::TimedOut, "timed out");
    /// let refused = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
    ///
    /// logger
    ///     .log_with_errors(LogLevel::Error, "connect failed", [Some(&timeout), None, Some(&refused)])
    ///     .unwrap();
    ///
    /// let lines = sink.lines();
    /// assert_eq!(lines.len(), 2);
    /// assert!(lines[0].contains("connect failed timed out"));
    /// assert!(lines[1].contains("connect failed refused"));
    /// ```
    pub fn log_with_errors<I, E>(
        &self,
        severity: impl Into<Severity>,
        message: impl AsRef<str>,
        errors: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = Option<E>>,
        E: fmt::Display,
    {
        let errors: Vec<E> = errors.into_iter().flatten().collect();
        let errors: Vec<&dyn fmt::Display> = errors.iter().map(|e| e as &dyn fmt::Display).collect();
        self.emit(severity.into(), message.as_ref(), &errors)
    }

    /// Log `message` with a single error attached.
    pub fn log_error(
        &self,
        severity: impl Into<Severity>,
        message: impl AsRef<str>,
        error: impl fmt::Display,
    ) -> Result<()> {
        self.emit(severity.into(), message.as_ref(), &[&error as &dyn fmt::Display])
    }

    fn emit(&self, severity: Severity, message: &str, errors: &[&dyn fmt::Display]) -> Result<()> {
        let mut sink = self.sink.lock();

        if severity < self.min_severity {
            return Ok(());
        }

        let level = match severity.level() {
            Some(level) => level,
            None => {
                writeln!(sink, "{}", INVALID_LEVEL_DIAGNOSTIC).map_err(LoggerError::write)?;
                LogLevel::Info
            }
        };

        let timestamp = timestamp::now();
        let line = LineFormat {
            level,
            timestamp: &timestamp,
            message,
            origin: &self.origin,
            use_colors: self.colors_enabled(),
        };

        if errors.is_empty() {
            writeln!(sink, "{}", line.render(None)).map_err(LoggerError::write)?;
        } else {
            for error in errors {
                writeln!(sink, "{}", line.render(Some(*error))).map_err(LoggerError::write)?;
            }
        }

        sink.flush().map_err(LoggerError::flush)
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush().map_err(LoggerError::flush)
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Warning, message)
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    #[inline]
    pub fn ok(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Ok, message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("origin", &self.origin)
            .field("min_severity", &self.min_severity)
            .field("use_colors", &self.colors_enabled())
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.sink.get_mut().flush() {
            eprintln!("[PICOLOG ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use picolog::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .origin("app/worker")
///     .min_level(LogLevel::Warning)
///     .colors(true)
///     .sink(sink.clone())
///     .build();
///
/// logger.debug("hidden").unwrap();
/// logger.error("shown").unwrap();
/// assert_eq!(sink.lines().len(), 1);
/// ```
pub struct LoggerBuilder {
    origin: String,
    min_severity: Severity,
    use_colors: bool,
    sink: Option<BoxedSink>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            origin: String::new(),
            min_severity: LogLevel::Info.into(),
            use_colors: false,
            sink: None,
        }
    }

    /// Set the label printed after `At package:`
    #[must_use = "builder methods return a new value"]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: impl Into<Severity>) -> Self {
        self.min_severity = level.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.use_colors = enabled;
        self
    }

    /// Write to `sink` instead of standard output
    #[must_use = "builder methods return a new value"]
    pub fn sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the logger
    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(sinks::stdout);
        Logger::from_parts(self.origin, self.min_severity, self.use_colors, sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
