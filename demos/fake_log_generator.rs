//! Fake log generator
//!
//! Writes random log lines to `fake_logs.txt`, attaching a generic error to
//! every `ERROR` line. Handy for feeding log-analysis scripts.
//!
//! Run with: cargo run --example fake_log_generator [count]

use picolog::prelude::*;
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::{self, BufWriter};
use std::thread;
use std::time::Duration;

const MESSAGES: [&str; 5] = [
    "User logged in",
    "File not found",
    "Network error",
    "Operation successful",
    "Data saved",
];

fn main() -> Result<()> {
    let count: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10_000);

    let file = File::create("fake_logs.txt")
        .map_err(|e| LoggerError::io_operation("creating fake_logs.txt", e.to_string(), e))?;
    let logger = Logger::with_sink("main/fake_logs", LogLevel::Info, false, BufWriter::new(file));
    let generic_error = io::Error::new(io::ErrorKind::Other, "Generic Error");
    let mut rng = rand::thread_rng();

    for _ in 0..count {
        let level = *LogLevel::ALL.choose(&mut rng).unwrap_or(&LogLevel::Info);
        let message = MESSAGES.choose(&mut rng).copied().unwrap_or("Data saved");

        match level {
            LogLevel::Error => logger.log_error(level, message, &generic_error)?,
            _ => logger.log(level, message)?,
        }

        thread::sleep(Duration::from_millis(5));
    }

    logger.flush()?;
    println!("Wrote {} log lines to fake_logs.txt", count);
    Ok(())
}
