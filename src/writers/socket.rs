//! Network writer placeholder
//!
//! Accepts entries without transmitting them. It reserves the slot for a
//! network sink in rule configurations and counts what it was given.

use crate::core::{LogEntry, Result, Writer};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct SocketWriter {
    address: Option<String>,
    accepted: AtomicU64,
}

impl SocketWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the intended destination, e.g. `"logs.internal:514"`
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            accepted: AtomicU64::new(0),
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Number of entries accepted so far
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }
}

impl Writer for SocketWriter {
    fn write(&self, _entry: &LogEntry) -> Result<()> {
        self.accepted.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn name(&self) -> &str {
        "socket"
    }
}
