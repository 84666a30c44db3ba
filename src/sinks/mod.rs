//! Output destinations
//!
//! A logger writes to any [`std::io::Write`] + `Send` value. Standard output
//! is the default; [`MemorySink`] captures lines for inspection.

pub mod memory;

pub use memory::MemorySink;

use std::io::Write;

/// Boxed sink as stored by a logger.
pub type BoxedSink = Box<dyn Write + Send>;

/// The process standard output stream.
pub fn stdout() -> BoxedSink {
    Box::new(std::io::stdout())
}
