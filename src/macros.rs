//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each one
//! evaluates to the `Result` of the underlying call.
//!
//! # Examples
//!
//! ```
//! use picolog::prelude::*;
//! use picolog::{info, warning};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::with_sink("server", LogLevel::Info, false, sink.clone());
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! warning!(logger, "{} connections pending", 3).unwrap();
//!
//! assert_eq!(sink.lines().len(), 2);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use picolog::prelude::*;
/// # let logger = Logger::with_sink("doc", LogLevel::Info, false, MemorySink::new());
/// use picolog::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! ok {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Ok, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use crate::sinks::MemorySink;

    fn capture() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::with_sink("picolog/macros", LogLevel::Info, false, sink.clone());
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = capture();
        log!(logger, LogLevel::Warning, "Formatted: {}", 42).unwrap();
        assert!(sink.contents().contains("[WARNING]"));
        assert!(sink.contents().contains(" : Formatted: 42 - At package: picolog/macros"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = capture();
        info!(logger, "Items: {}", 100).unwrap();
        debug!(logger, "Count: {}", 5).unwrap();
        warning!(logger, "Retry {} of {}", 1, 3).unwrap();
        error!(logger, "Error message").unwrap();
        ok!(logger, "Done in {}ms", 12).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("[INFO]") && lines[0].contains("Items: 100"));
        assert!(lines[1].starts_with("[DEBUG]") && lines[1].contains("Count: 5"));
        assert!(lines[2].starts_with("[WARNING]") && lines[2].contains("Retry 1 of 3"));
        assert!(lines[3].starts_with("[ERROR]"));
        assert!(lines[4].starts_with("[OK]") && lines[4].contains("Done in 12ms"));
    }
}
