//! File logging example
//!
//! Demonstrates file output with path templates and configuration from JSON.
//!
//! Run with: cargo run --example file_logging

use rust_tagged_logger::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Tagged Logger - File Logging Example ===\n");

    // Path templates expand {env:...} and {now:...} on every write
    let file = FileWriter::new("{env:temp}/tagged-logger-demo/app-{now:%Y-%m-%d}.log")?;
    let path = file.current_path()?;
    println!("1. Writing to {}", path.display());

    {
        let file = WriterGuard::start(Arc::new(file))?;
        let logger = Logger::builder()
            .rule(Level::Info, file.shared())
            .rule(Level::Debug, Arc::new(DebugWriter::new()))
            .build();

        logger.debug("io").append("only on the debug channel");
        for i in 0..5 {
            logger.info("io").append("Log entry ").append(i);
        }
        logger.error("io").append("Something went wrong");
    }

    println!("\n2. Logger from a JSON configuration:");
    let config = LoggerConfig::from_json(
        r#"{
            "delivery": { "mode": "sync" },
            "rules": [
                { "min_level": "Warning", "writer": { "kind": "console", "colors": false } },
                { "min_level": "Info", "writer": {
                    "kind": "file",
                    "path_format": "{env:temp}/tagged-logger-demo/config-{now:%Y%m%d}.log",
                    "timestamp": "Rfc3339"
                } }
            ]
        }"#,
    )?;
    let mut logger = config.build()?;
    logger.info("cfg").append("file only");
    logger.warning("cfg").append("file and console");
    logger.shutdown(Duration::from_secs(1));

    println!("\nLog content:");
    let content = std::fs::read_to_string(&path).map_err(|e| {
        LoggerError::io_operation("reading demo log", path.display().to_string(), e)
    })?;
    println!("{}", content);

    println!("=== Example completed successfully! ===");

    Ok(())
}
