//! Declarative logger configuration
//!
//! A [`LoggerConfig`] lists rules and the writer each one feeds, and can be
//! loaded from JSON:
//!
//! ```
//! use rust_tagged_logger::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "delivery": { "mode": "queued", "capacity": 256 },
//!     "rules": [
//!         { "min_level": "Debug", "writer": { "kind": "console", "colors": false } },
//!         { "min_level": "Error", "writer": { "kind": "socket" } }
//!     ]
//! }"#).unwrap();
//!
//! let logger = config.build().unwrap();
//! assert_eq!(logger.rule_count(), 2);
//! ```

use super::{
    error::{LoggerError, Result},
    level::Level,
    logger::Logger,
    rule::Rule,
    timestamp::TimestampFormat,
    writer::Writer,
};
use crate::writers::{ConsoleWriter, DebugWriter, FileWriter, SocketWriter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Delivery {
    /// Write on the caller's thread when the entry is finalized
    #[default]
    Sync,
    /// Write from a background thread fed by a bounded queue
    Queued { capacity: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WriterConfig {
    Debug {
        #[serde(default)]
        timestamp: Option<TimestampFormat>,
    },
    Console {
        #[serde(default = "default_colors")]
        colors: bool,
        #[serde(default)]
        timestamp: Option<TimestampFormat>,
    },
    File {
        #[serde(default)]
        path_format: Option<String>,
        #[serde(default)]
        timestamp: Option<TimestampFormat>,
    },
    Socket {
        #[serde(default)]
        address: Option<String>,
    },
}

fn default_colors() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub min_level: Level,
    pub writer: WriterConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub delivery: Delivery,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                path.display().to_string(),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if let Delivery::Queued { capacity: 0 } = self.delivery {
            return Err(LoggerError::config(
                "Delivery",
                "queue capacity must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Create and start every writer, then assemble the logger.
    ///
    /// The logger owns the writers it started and stops them on shutdown.
    pub fn build(&self) -> Result<Logger> {
        self.validate()?;

        let writers = start_writers(self.rules.iter().map(|rule| rule.writer.create()))?;

        let mut logger = match self.delivery {
            Delivery::Sync => Logger::new(),
            Delivery::Queued { capacity } => Logger::with_queue(capacity),
        };

        for (rule, writer) in self.rules.iter().zip(writers) {
            logger.add_rule(Rule::new(rule.min_level, Arc::clone(&writer)));
            logger.own_writer(writer);
        }

        Ok(logger)
    }
}

/// Start writers in order. On the first failure, stop the ones already
/// started and return that error.
fn start_writers<I>(writers: I) -> Result<Vec<Arc<dyn Writer>>>
where
    I: IntoIterator<Item = Result<Arc<dyn Writer>>>,
{
    let mut started: Vec<Arc<dyn Writer>> = Vec::new();

    for writer in writers {
        let result = writer.and_then(|writer| writer.start().map(|()| writer));
        match result {
            Ok(writer) => started.push(writer),
            Err(e) => {
                for writer in &started {
                    if let Err(stop_err) = writer.stop() {
                        eprintln!(
                            "[LOGGER ERROR] Writer '{}' failed to stop: {}",
                            writer.name(),
                            stop_err
                        );
                    }
                }
                return Err(e);
            }
        }
    }

    Ok(started)
}

impl WriterConfig {
    pub fn create(&self) -> Result<Arc<dyn Writer>> {
        let writer: Arc<dyn Writer> = match self {
            WriterConfig::Debug { timestamp } => {
                let mut writer = DebugWriter::new();
                if let Some(format) = timestamp {
                    writer = writer.with_timestamp_format(format.clone());
                }
                Arc::new(writer)
            }
            WriterConfig::Console { colors, timestamp } => {
                let mut writer = ConsoleWriter::with_colors(*colors);
                if let Some(format) = timestamp {
                    writer = writer.with_timestamp_format(format.clone());
                }
                Arc::new(writer)
            }
            WriterConfig::File {
                path_format,
                timestamp,
            } => {
                let mut writer = match path_format {
                    Some(template) => FileWriter::new(template)?,
                    None => FileWriter::default(),
                };
                if let Some(format) = timestamp {
                    writer = writer.with_timestamp_format(format.clone());
                }
                Arc::new(writer)
            }
            WriterConfig::Socket { address } => match address {
                Some(address) => Arc::new(SocketWriter::with_address(address.clone())),
                None => Arc::new(SocketWriter::new()),
            },
        };
        Ok(writer)
    }
}
