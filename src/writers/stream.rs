//! Mutex-guarded byte stream shared by the console and debug writers

use parking_lot::Mutex;
use std::io::{self, Write};

pub(crate) struct StreamTarget {
    inner: Mutex<Box<dyn Write + Send>>,
}

impl StreamTarget {
    pub(crate) fn new(target: impl Write + Send + 'static) -> Self {
        Self {
            inner: Mutex::new(Box::new(target)),
        }
    }

    /// Write one formatted line in a single locked call
    pub(crate) fn write_line(&self, line: &str) -> io::Result<()> {
        self.inner.lock().write_all(line.as_bytes())
    }

    pub(crate) fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}
