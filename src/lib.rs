//! # Picolog
//!
//! A tiny thread-safe logger that writes leveled, timestamped lines:
//!
//! ```text
//! [WARNING] - 2025-01-08 10:30:45 : disk low - At package: svc/x
//! ```
//!
//! ## Features
//!
//! - **Five levels**: `Info`, `Debug`, `Warning`, `Error`, `Ok`, ranked in that order
//! - **Optional colors**: each line wrapped in its level's ANSI color
//! - **Error annotation**: one line per attached error
//! - **Thread Safe**: a logger can be shared across threads without torn lines
//! - **Injectable sink**: standard output by default, any `Write` otherwise

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{LogLevel, Logger, LoggerBuilder, LoggerError, Result, Severity};
    pub use crate::sinks::MemorySink;
}

pub use crate::core::{
    LineFormat, LogLevel, Logger, LoggerBuilder, LoggerError, Result, Severity, ANSI_RESET,
    INVALID_LEVEL_DIAGNOSTIC, TIMESTAMP_FORMAT,
};
pub use crate::sinks::MemorySink;
