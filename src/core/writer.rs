//! Writer trait for log output destinations

use super::{entry::LogEntry, error::Result};
use std::ops::Deref;
use std::sync::Arc;

/// A sink for finalized entries.
///
/// Writers are shared between rules and threads, so every method takes
/// `&self` and implementations guard their own state. `start` and `stop`
/// must be idempotent.
pub trait Writer: Send + Sync {
    fn start(&self) -> Result<()> {
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        Ok(())
    }

    fn write(&self, entry: &LogEntry) -> Result<()>;

    fn name(&self) -> &str;
}

/// Keeps a writer started for the guard's lifetime.
///
/// `stop()` runs when the guard is dropped, on every exit path.
///
/// ```
/// use rust_tagged_logger::prelude::*;
/// use std::sync::Arc;
///
/// let socket = WriterGuard::start(Arc::new(SocketWriter::new())).unwrap();
/// let logger = Logger::new();
/// logger.add_rule(Rule::new(Level::Info, socket.shared()));
/// logger.info("main").append("hello");
/// ```
pub struct WriterGuard<W: Writer + 'static> {
    writer: Arc<W>,
}

impl<W: Writer + 'static> WriterGuard<W> {
    pub fn start(writer: Arc<W>) -> Result<Self> {
        writer.start()?;
        Ok(Self { writer })
    }

    /// Handle suitable for [`Rule::new`](crate::Rule::new)
    pub fn shared(&self) -> Arc<dyn Writer> {
        Arc::clone(&self.writer) as Arc<dyn Writer>
    }
}

impl<W: Writer + 'static> Deref for WriterGuard<W> {
    type Target = W;

    fn deref(&self) -> &W {
        &self.writer
    }
}

impl<W: Writer + 'static> Drop for WriterGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.writer.stop() {
            eprintln!(
                "[LOGGER ERROR] Writer '{}' failed to stop: {}",
                self.writer.name(),
                e
            );
        }
    }
}
