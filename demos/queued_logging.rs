//! Queued logging example
//!
//! Demonstrates delivery on a background thread through a bounded queue.
//!
//! Run with: cargo run --example queued_logging

use rust_tagged_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    println!("=== Rust Tagged Logger - Queued Logging Example ===\n");

    let console = Arc::new(ConsoleWriter::new());
    let mut logger = Logger::builder()
        .rule(Level::Info, console)
        .queued(1000)
        .build();

    println!("1. Logging from 4 threads:");
    let start = Instant::now();
    thread::scope(|scope| {
        for id in 0..4 {
            let logger = &logger;
            scope.spawn(move || {
                for i in 0..5 {
                    logger
                        .info(format!("worker-{}", id))
                        .append("message ")
                        .append(i);
                }
            });
        }
    });
    let elapsed = start.elapsed();

    println!("\n2. Draining the queue:");
    let clean = logger.shutdown(Duration::from_secs(5));
    let metrics = logger.metrics();
    println!(
        "   enqueued in {:?}, drained cleanly: {}, writes: {}, queue full events: {}",
        elapsed,
        clean,
        metrics.writes(),
        metrics.queue_full_events()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
