//! Log level definitions
//!
//! [`LogLevel`] is the closed set of five levels a caller normally uses.
//! [`Severity`] is the raw ordinal the logger compares against its minimum;
//! it can carry values outside the five known levels, which the logger
//! reports and coerces to [`LogLevel::Info`] at emission time.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ANSI reset sequence appended to colored lines.
pub const ANSI_RESET: &str = "\x1b[0m";

/// The five log levels, ranked in declaration order.
///
/// The ranking is used only for filtering and is not a severity scale:
/// `Ok` ranks above `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Info = 0,
    Debug = 1,
    Warning = 2,
    Error = 3,
    Ok = 4,
}

impl LogLevel {
    /// Every level, lowest rank first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Ok,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Ok => "OK",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Info => Blue,
            LogLevel::Debug => Magenta,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Ok => Green,
        }
    }

    /// Foreground escape sequence for this level, e.g. `\x1b[34m` for `Info`.
    pub fn ansi_prefix(&self) -> String {
        format!("\x1b[{}m", self.color_code().to_fg_str())
    }

    /// Position of this level in the ranking.
    #[inline]
    pub fn ordinal(&self) -> i32 {
        *self as i32
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "OK" => Ok(LogLevel::Ok),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

/// Raw level ordinal.
///
/// Any integer is representable so that a logger can be configured with,
/// or asked to emit at, a value that is not one of the five levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Severity(i32);

impl Severity {
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Severity(raw)
    }

    #[inline]
    pub const fn raw(&self) -> i32 {
        self.0
    }

    /// The level this ordinal names, or `None` when it is out of range.
    pub fn level(&self) -> Option<LogLevel> {
        match self.0 {
            0 => Some(LogLevel::Info),
            1 => Some(LogLevel::Debug),
            2 => Some(LogLevel::Warning),
            3 => Some(LogLevel::Error),
            4 => Some(LogLevel::Ok),
            _ => None,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.level().is_some()
    }
}

impl From<LogLevel> for Severity {
    fn from(level: LogLevel) -> Self {
        Severity(level.ordinal())
    }
}

impl Default for Severity {
    fn default() -> Self {
        LogLevel::default().into()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level() {
            Some(level) => write!(f, "{}", level),
            None => write!(f, "LEVEL({})", self.0),
        }
    }
}
