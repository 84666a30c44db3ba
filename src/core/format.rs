//! Line formatting
//!
//! A line looks like
//! `[WARNING] - 2025-01-08 10:30:45 : disk low - At package: svc/x`,
//! optionally with an error's text after the message and optionally wrapped
//! in the level's ANSI color.

use super::log_level::{LogLevel, ANSI_RESET};
use std::fmt;

/// Diagnostic written when a call carries an out-of-range severity.
pub const INVALID_LEVEL_DIAGNOSTIC: &str =
    "Picolog Error: Invalid log level provided, defaulting to INFO";

/// Everything shared by the lines of one emission call.
#[derive(Debug, Clone)]
pub struct LineFormat<'a> {
    pub level: LogLevel,
    pub timestamp: &'a str,
    pub message: &'a str,
    pub origin: &'a str,
    pub use_colors: bool,
}

impl LineFormat<'_> {
    /// Format a line, with `error` rendered after the message when present.
    pub fn render(&self, error: Option<&dyn fmt::Display>) -> String {
        let (prefix, suffix) = if self.use_colors {
            (self.level.ansi_prefix(), ANSI_RESET)
        } else {
            (String::new(), "")
        };

        match error {
            Some(err) => format!(
                "{}[{}] - {} : {} {} - At package: {}{}",
                prefix,
                self.level.to_str(),
                self.timestamp,
                self.message,
                err,
                self.origin,
                suffix
            ),
            None => format!(
                "{}[{}] - {} : {} - At package: {}{}",
                prefix,
                self.level.to_str(),
                self.timestamp,
                self.message,
                self.origin,
                suffix
            ),
        }
    }
}
