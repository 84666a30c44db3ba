//! Integration tests for picolog
//!
//! These tests verify:
//! - Level filtering against the configured minimum
//! - Out-of-range severity recovery
//! - Error annotation
//! - Color toggling
//! - File sinks

use picolog::prelude::*;
use picolog::INVALID_LEVEL_DIAGNOSTIC;
use std::fs;
use std::io;
use tempfile::TempDir;

fn capture(origin: &str, min: impl Into<Severity>, use_colors: bool) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::with_sink(origin, min, use_colors, sink.clone());
    (logger, sink)
}

/// `YYYY-MM-DD HH:MM:SS`
fn is_timestamp(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 | 16 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

#[test]
fn test_log_levels() {
    let (logger, sink) = capture("picolog/test_log_levels", LogLevel::Info, false);

    let cases = [
        (LogLevel::Info, "This is an info message"),
        (LogLevel::Debug, "This is a debug message"),
        (LogLevel::Warning, "This is a warning message"),
        (LogLevel::Error, "This is an error message"),
        (LogLevel::Ok, "This is an ok message"),
    ];

    for (level, message) in cases {
        sink.clear();
        logger.log(level, message).expect("log should succeed");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1, "one line for {}", level);
        assert!(lines[0].contains(message));
        assert!(lines[0].starts_with(&format!("[{}] - ", level)));
    }
}

#[test]
fn test_exact_line_format() {
    let (logger, sink) = capture("svc/x", LogLevel::Info, false);
    logger.log(LogLevel::Warning, "disk low").unwrap();

    let contents = sink.contents();
    assert!(contents.ends_with('\n'));
    let line = contents.trim_end_matches('\n');

    let rest = line.strip_prefix("[WARNING] - ").expect("level prefix");
    let (timestamp, rest) = rest.split_at(19);
    assert!(is_timestamp(timestamp), "bad timestamp: {}", timestamp);
    assert_eq!(rest, " : disk low - At package: svc/x");
}

#[test]
fn test_below_minimum_is_silent() {
    let (logger, sink) = capture("svc/x", LogLevel::Error, false);
    logger.log(LogLevel::Info, "ignored").unwrap();
    assert!(sink.is_empty());
}

#[test]
fn test_invalid_log_level() {
    let (logger, sink) = capture("picolog/test_invalid_log_level", Severity::from_raw(-1), false);
    logger.log(Severity::from_raw(-1), "This is invalid").unwrap();

    let output = sink.contents();
    assert!(output.contains("Picolog Error: Invalid log level provided, defaulting to INFO"));

    let lines = sink.lines();
    assert_eq!(lines[0], INVALID_LEVEL_DIAGNOSTIC);
    assert!(lines[1].starts_with("[INFO] - "));
    assert!(lines[1].ends_with("This is invalid - At package: picolog/test_invalid_log_level"));
}

#[test]
fn test_log_with_optional_error() {
    let (logger, sink) = capture("picolog/test_log_with_optional_error", LogLevel::Error, false);
    let sample_error = io::Error::new(io::ErrorKind::Other, "This is a sample error");

    logger
        .log_error(LogLevel::Error, "This is an error", &sample_error)
        .unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("This is an error"));
    assert!(lines[0].contains("This is a sample error"));
}

#[test]
fn test_log_without_optional_error() {
    let (logger, sink) = capture("picolog/test_log_without_optional_error", LogLevel::Info, false);
    let message = "This is sparta!";

    logger.log(LogLevel::Info, message).unwrap();

    let lines = sink.lines();
    assert!(lines[0].ends_with(&format!(
        " : {} - At package: picolog/test_log_without_optional_error",
        message
    )));
}

#[test]
fn test_boxed_dyn_errors() {
    let (logger, sink) = capture("picolog/dyn", LogLevel::Info, false);
    let parse_err: Box<dyn std::error::Error> = "x1".parse::<u32>().unwrap_err().into();
    let io_err: Box<dyn std::error::Error> = io::Error::new(io::ErrorKind::NotFound, "missing").into();

    logger
        .log_with_errors(LogLevel::Error, "load failed", vec![Some(parse_err), None, Some(io_err)])
        .unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("load failed invalid digit found in string - At package"));
    assert!(lines[1].contains("load failed missing - At package"));
}

#[test]
fn test_optional_colors() {
    let (logger, sink) = capture("picolog/test_optional_colors", LogLevel::Info, true);

    logger.log(LogLevel::Info, "This should be in color").unwrap();
    assert!(sink.contents().contains("\x1b["));

    sink.clear();
    logger.set_colors(false);
    logger.log(LogLevel::Info, "This should not be in color").unwrap();
    assert!(!sink.contents().contains("\x1b["));
}

#[test]
fn test_color_per_level() {
    let (logger, sink) = capture("picolog/colors", LogLevel::Info, true);
    for level in LogLevel::ALL {
        logger.log(level, "colored").unwrap();
    }

    let expected = ["\x1b[34m", "\x1b[35m", "\x1b[33m", "\x1b[31m", "\x1b[32m"];
    for (line, prefix) in sink.lines().iter().zip(expected) {
        assert!(line.starts_with(prefix), "{:?} should start with {:?}", line, prefix);
        assert!(line.ends_with("\x1b[0m"));
    }
}

#[test]
fn test_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("picolog.log");

    let file = fs::File::create(&log_file).expect("Failed to create log file");
    let logger = Logger::builder()
        .origin("main/file")
        .min_level(LogLevel::Debug)
        .sink(file)
        .build();

    logger.info("skipped").unwrap();
    logger.debug("first").unwrap();
    logger.ok("second").unwrap();
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[DEBUG]"));
    assert!(lines[1].starts_with("[OK]"));
}

#[test]
fn test_level_serde() {
    let json = serde_json::to_string(&LogLevel::Warning).unwrap();
    assert_eq!(json, "\"Warning\"");
    let level: LogLevel = serde_json::from_str("\"Ok\"").unwrap();
    assert_eq!(level, LogLevel::Ok);
}
