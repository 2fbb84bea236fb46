//! Logger metrics for observability
//!
//! Counters for finalized entries, delivered writes, writer failures and
//! queue pressure.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_tagged_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_finalized();
/// metrics.record_written();
///
/// assert_eq!(metrics.entries_finalized(), 1);
/// assert_eq!(metrics.writes(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries whose scope ended and that were handed to dispatch
    entries_finalized: AtomicU64,

    /// Successful writer calls
    writes: AtomicU64,

    /// Writer calls that returned an error or panicked
    write_failures: AtomicU64,

    /// Entries that no rule accepted
    unmatched: AtomicU64,

    /// Number of times the delivery queue was full
    queue_full_events: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            entries_finalized: AtomicU64::new(0),
            writes: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            unmatched: AtomicU64::new(0),
            queue_full_events: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn entries_finalized(&self) -> u64 {
        self.entries_finalized.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn unmatched(&self) -> u64 {
        self.unmatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn queue_full_events(&self) -> u64 {
        self.queue_full_events.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_finalized(&self) -> u64 {
        self.entries_finalized.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_unmatched(&self) -> u64 {
        self.unmatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_queue_full(&self) -> u64 {
        self.queue_full_events.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed writes as a percentage (0.0 - 100.0) of all write attempts
    ///
    /// Returns 0.0 if nothing has been written.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.writes() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.entries_finalized.store(0, Ordering::Relaxed);
        self.writes.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.unmatched.store(0, Ordering::Relaxed);
        self.queue_full_events.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            entries_finalized: AtomicU64::new(self.entries_finalized()),
            writes: AtomicU64::new(self.writes()),
            write_failures: AtomicU64::new(self.write_failures()),
            unmatched: AtomicU64::new(self.unmatched()),
            queue_full_events: AtomicU64::new(self.queue_full_events()),
        }
    }
}
