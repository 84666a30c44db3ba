//! Core logger types

pub mod error;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use format::{LineFormat, INVALID_LEVEL_DIAGNOSTIC};
pub use log_level::{LogLevel, Severity, ANSI_RESET};
pub use logger::{Logger, LoggerBuilder};
pub use timestamp::TIMESTAMP_FORMAT;
