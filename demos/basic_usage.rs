//! Basic logger usage example
//!
//! Demonstrates synchronous logging to the console with per-rule thresholds.
//!
//! Run with: cargo run --example basic_usage

use rust_tagged_logger::prelude::*;
use rust_tagged_logger::{entry, info};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Tagged Logger - Basic Usage Example ===\n");

    // Create a synchronous logger with one console rule
    let logger = Logger::new();
    logger.add_rule(Rule::new(Level::Debug, Arc::new(ConsoleWriter::new())));

    println!("1. Logging at different levels:");
    logger.debug("main").append("This is a debug message");
    logger.info("main").append("This is an info message");
    logger.warning("main").append("This is a warning message");
    logger.error("main").append("This is an error message");
    logger.fatal("main").append("This is a fatal message");

    println!("\n2. Building a message from fragments:");
    logger.error("main").append(4).append("th line of log");
    logger
        .warning("main")
        .append("third ")
        .append("line of log ")
        .append(3.5);

    println!("\n3. Recording the call site:");
    entry!(logger, Level::Info, "main").append("with file and line");
    info!(logger, "main", "formatted in one call: {} + {} = {}", 1, 2, 1 + 2);

    println!("\n4. A second rule with a higher threshold:");
    let plain = Arc::new(ConsoleWriter::with_colors(false));
    logger.add_rule(Rule::new(Level::Error, plain));
    logger.info("main").append("Info message (console only)");
    logger.error("main").append("Error message (both rules)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
