//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Sink IO failure with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Wrap a failed sink write
    pub(crate) fn write(source: std::io::Error) -> Self {
        let message = source.to_string();
        Self::io_operation("writing log line", message, source)
    }

    /// Wrap a failed sink flush
    pub(crate) fn flush(source: std::io::Error) -> Self {
        let message = source.to_string();
        Self::io_operation("flushing log sink", message, source)
    }
}
