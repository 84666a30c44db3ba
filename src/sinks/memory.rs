//! In-memory sink

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Sink that collects everything written to it.
///
/// Clones share one buffer, so a clone can be handed to a [`Logger`] while
/// the original is kept to inspect the output.
///
/// # Example
///
/// ```
/// use picolog::{LogLevel, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::with_sink("demo", LogLevel::Info, false, sink.clone());
/// logger.info("hello").unwrap();
///
/// assert!(sink.contents().contains("hello - At package: demo"));
/// ```
///
/// [`Logger`]: crate::Logger
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written output split into lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
