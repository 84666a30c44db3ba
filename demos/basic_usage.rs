//! Basic logger usage example
//!
//! Demonstrates levels, filtering, colors, error annotation and sharing a
//! logger between threads.
//!
//! Run with: cargo run --example basic_usage

use picolog::prelude::*;
use picolog::{info, ok};
use std::io;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== Picolog - Basic Usage Example ===\n");

    let logger = Logger::new("example/main", LogLevel::Info, false);

    println!("1. Logging at every level:");
    logger.info("This is an info message")?;
    logger.debug("This is a debug message")?;
    logger.warning("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.ok("This is an ok message")?;

    println!("\n2. Minimum level WARNING - info and debug won't show:");
    let filtered = Logger::new("example/filtered", LogLevel::Warning, false);
    filtered.info("Info message (hidden)")?;
    filtered.debug("Debug message (hidden)")?;
    filtered.warning("Warning message (visible)")?;
    filtered.ok("Ok message (visible, OK ranks above ERROR)")?;

    println!("\n3. Colored output, toggled live:");
    let colored = Logger::new("example/colors", LogLevel::Info, true);
    for level in LogLevel::ALL {
        colored.log(level, format!("{} in color", level))?;
    }
    colored.set_colors(false);
    colored.info("Colors switched off")?;

    println!("\n4. Attaching errors:");
    let not_found = io::Error::new(io::ErrorKind::NotFound, "config.toml not found");
    let denied = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    logger.log_error(LogLevel::Error, "Failed to load config:", &not_found)?;
    logger.log_with_errors(LogLevel::Error, "Startup checks failed:", [Some(&not_found), None, Some(&denied)])?;

    println!("\n5. Out-of-range severity:");
    logger.log(Severity::from_raw(9), "Logged as INFO after a diagnostic")?;

    println!("\n6. Sharing a logger between threads:");
    let shared = Arc::new(Logger::new("example/threads", LogLevel::Info, false));
    let handles: Vec<_> = (1..=2)
        .map(|n| {
            let logger = Arc::clone(&shared);
            thread::spawn(move || info!(logger, "Logging from thread {}", n))
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked")?;
    }
    ok!(shared, "All threads finished")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
