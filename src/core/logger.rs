//! Main logger implementation

use super::{
    entry::{Entry, LogEntry},
    level::Level,
    metrics::LoggerMetrics,
    rule::Rule,
    writer::Writer,
};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::RwLock;
use std::any::Any;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// Used when the logger is dropped without an explicit `shutdown()`.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum number of queued entries delivered under one rules lock
const BATCH_SIZE: usize = 64;

/// Façade that hands out entries and routes finished ones through its rules.
///
/// By default delivery is synchronous: all formatting and I/O happen on the
/// thread that drops the [`Entry`]. With [`Logger::with_queue`] finished
/// entries are passed to a single delivery thread through a bounded queue;
/// entries finalized in order on one thread reach every writer in that order.
///
/// # Example
///
/// ```
/// use rust_tagged_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::new();
/// logger.add_rule(Rule::new(Level::Warning, Arc::new(SocketWriter::new())));
///
/// logger.debug("net").append("dropped by the rule");
/// logger.error("net").append("timeout");
/// assert_eq!(logger.metrics().writes(), 1);
/// ```
pub struct Logger {
    rules: Arc<RwLock<Vec<Rule>>>,
    metrics: Arc<LoggerMetrics>,
    sender: Option<Sender<LogEntry>>,
    worker: Option<thread::JoinHandle<()>>,
    /// Writers started on the caller's behalf (builder/config); stopped on shutdown
    owned_writers: Vec<Arc<dyn Writer>>,
    stopped: bool,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Arc::new(RwLock::new(Vec::new())),
            metrics: Arc::new(LoggerMetrics::new()),
            sender: None,
            worker: None,
            owned_writers: Vec::new(),
            stopped: false,
        }
    }

    /// Create a logger that delivers through a bounded queue of `capacity`
    /// entries. A full queue blocks the caller rather than dropping entries.
    #[must_use]
    pub fn with_queue(capacity: usize) -> Self {
        let mut logger = Self::new();
        let (sender, receiver) = bounded(capacity.max(1));
        let rules = Arc::clone(&logger.rules);
        let metrics = Arc::clone(&logger.metrics);

        let spawned = thread::Builder::new()
            .name("log-delivery".to_string())
            .spawn(move || Self::run_worker(&receiver, &rules, &metrics));

        match spawned {
            Ok(handle) => {
                logger.sender = Some(sender);
                logger.worker = Some(handle);
            }
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] Failed to spawn delivery thread, falling back to synchronous delivery: {}",
                    e
                );
            }
        }

        logger
    }

    /// Delivery loop: block for one entry, then drain what is already queued
    fn run_worker(
        receiver: &Receiver<LogEntry>,
        rules: &Arc<RwLock<Vec<Rule>>>,
        metrics: &Arc<LoggerMetrics>,
    ) {
        let mut batch = Vec::with_capacity(BATCH_SIZE);

        while let Ok(entry) = receiver.recv() {
            batch.push(entry);
            while batch.len() < BATCH_SIZE {
                match receiver.try_recv() {
                    Ok(entry) => batch.push(entry),
                    Err(_) => break,
                }
            }

            let guard = rules.read();
            for entry in batch.drain(..) {
                Self::deliver(&guard, &entry, metrics);
            }
        }
    }

    /// Apply every rule to the entry with per-writer panic isolation.
    ///
    /// Writer errors and panics are reported on stderr and counted; they
    /// never reach the code that logged the entry.
    fn deliver(rules: &[Rule], entry: &LogEntry, metrics: &LoggerMetrics) {
        let mut matched = false;

        for rule in rules.iter().filter(|rule| rule.accepts(entry.level())) {
            matched = true;
            let result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| rule.apply(entry)));

            match result {
                Ok(Ok(())) => {
                    metrics.record_written();
                }
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Writer '{}' failed: {}",
                        rule.writer().name(),
                        e
                    );
                    metrics.record_failure();
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Writer '{}' panicked: {}. \
                         Other writers continue to function.",
                        rule.writer().name(),
                        panic_message(panic_info.as_ref())
                    );
                    metrics.record_failure();
                }
            }
        }

        if !matched {
            metrics.record_unmatched();
        }
    }

    /// Called by [`Entry`] when it is dropped
    pub(crate) fn dispatch(&self, entry: LogEntry) {
        self.metrics.record_finalized();

        let entry = match self.sender {
            Some(ref sender) => match sender.try_send(entry) {
                Ok(()) => return,
                Err(TrySendError::Full(entry)) => {
                    self.metrics.record_queue_full();
                    match sender.send(entry) {
                        Ok(()) => return,
                        Err(e) => e.into_inner(),
                    }
                }
                Err(TrySendError::Disconnected(entry)) => entry,
            },
            None => entry,
        };

        let rules = self.rules.read();
        Self::deliver(&rules, &entry, &self.metrics);
    }

    /// Append a rule. Rules are evaluated in insertion order; no deduplication.
    pub fn add_rule(&self, rule: Rule) {
        self.rules.write().push(rule);
    }

    /// Snapshot of the current rules
    pub fn rules(&self) -> Vec<Rule> {
        self.rules.read().clone()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_queued(&self) -> bool {
        self.sender.is_some()
    }

    /// Start a new entry at `level` tagged with `tag`
    pub fn entry(&self, level: Level, tag: impl Into<String>) -> Entry<'_> {
        Entry::new(self, level, tag)
    }

    #[inline]
    pub fn debug(&self, tag: impl Into<String>) -> Entry<'_> {
        self.entry(Level::Debug, tag)
    }

    #[inline]
    pub fn info(&self, tag: impl Into<String>) -> Entry<'_> {
        self.entry(Level::Info, tag)
    }

    #[inline]
    pub fn warning(&self, tag: impl Into<String>) -> Entry<'_> {
        self.entry(Level::Warning, tag)
    }

    #[inline]
    pub fn error(&self, tag: impl Into<String>) -> Entry<'_> {
        self.entry(Level::Error, tag)
    }

    #[inline]
    pub fn fatal(&self, tag: impl Into<String>) -> Entry<'_> {
        self.entry(Level::Fatal, tag)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Hand a started writer to the logger so that shutdown stops it
    pub(crate) fn own_writer(&mut self, writer: Arc<dyn Writer>) {
        let ptr = Arc::as_ptr(&writer).cast::<()>();
        if !self
            .owned_writers
            .iter()
            .any(|owned| Arc::as_ptr(owned).cast::<()>() == ptr)
        {
            self.owned_writers.push(writer);
        }
    }

    /// Drain the delivery queue, then stop the writers this logger owns.
    ///
    /// Entries created after shutdown are delivered synchronously. If the
    /// queue does not drain within `timeout`, owned writers are left running
    /// for the delivery thread that is still using them.
    ///
    /// # Returns
    ///
    /// `true` if the queue drained within `timeout` and every owned writer
    /// stopped cleanly.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        if self.stopped {
            return true;
        }
        self.stopped = true;

        // Closing the channel lets the worker drain and exit
        drop(self.sender.take());

        let mut clean = true;
        let mut worker_detached = false;
        if let Some(handle) = self.worker.take() {
            let start = Instant::now();
            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!(
                            "[LOGGER ERROR] Delivery thread panicked during shutdown: {}",
                            panic_message(e.as_ref())
                        );
                        clean = false;
                    }
                    break;
                }

                if start.elapsed() >= timeout {
                    eprintln!(
                        "[LOGGER WARNING] Delivery thread did not finish within {:?}. \
                         Some entries may be lost.",
                        timeout
                    );
                    clean = false;
                    worker_detached = true;
                    break;
                }

                thread::sleep(Duration::from_millis(5));
            }
        }

        // The detached worker may still be writing to these
        if worker_detached {
            if !self.owned_writers.is_empty() {
                eprintln!(
                    "[LOGGER WARNING] Delivery thread still running; {} writer(s) left open",
                    self.owned_writers.len()
                );
            }
            return clean;
        }

        for writer in &self.owned_writers {
            if let Err(e) = writer.stop() {
                eprintln!(
                    "[LOGGER ERROR] Writer '{}' failed to stop: {}",
                    writer.name(),
                    e
                );
                clean = false;
            }
        }

        clean
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

        let failures = self.metrics.write_failures();
        if failures > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed writes (failure rate: {:.2}%)",
                failures,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use rust_tagged_logger::prelude::*;
/// use std::sync::Arc;
///
/// let console = Arc::new(ConsoleWriter::new());
/// let logger = Logger::builder()
///     .rule(Level::Debug, console.clone())
///     .rule(Level::Error, Arc::new(SocketWriter::new()))
///     .queued(1024)
///     .build();
/// assert_eq!(logger.rule_count(), 2);
/// ```
pub struct LoggerBuilder {
    rules: Vec<Rule>,
    queue_capacity: Option<usize>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            queue_capacity: None,
        }
    }

    /// Add a rule forwarding entries at or above `min_level` to `writer`
    #[must_use = "builder methods return a new value"]
    pub fn rule(mut self, min_level: Level, writer: Arc<dyn Writer>) -> Self {
        self.rules.push(Rule::new(min_level, writer));
        self
    }

    /// Deliver through a bounded queue on a background thread
    ///
    /// If not called, the logger delivers synchronously.
    #[must_use = "builder methods return a new value"]
    pub fn queued(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    pub fn build(self) -> Logger {
        let logger = match self.queue_capacity {
            Some(capacity) => Logger::with_queue(capacity),
            None => Logger::new(),
        };

        for rule in self.rules {
            logger.add_rule(rule);
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
