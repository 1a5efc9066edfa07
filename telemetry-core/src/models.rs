use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering used for timestamps in files, on the console and in JSON
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// One synthetic telemetry sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub timestamp: DateTime<Local>,
}

/// String-timestamped view of a reading (API payload and parsed file lines)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRecord {
    pub timestamp: String,
    pub cpu_usage: f64,
    pub memory_usage: f64,
}

impl Reading {
    pub fn new(cpu_usage: f64, memory_usage: f64, timestamp: DateTime<Local>) -> Self {
        Self { cpu_usage, memory_usage, timestamp }
    }

    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn to_record(&self) -> ReadingRecord {
        ReadingRecord {
            timestamp: self.timestamp_string(),
            cpu_usage: self.cpu_usage,
            memory_usage: self.memory_usage,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time: {} | CPU Usage: {:.2}% | Memory Usage: {:.2}%",
            self.timestamp_string(),
            self.cpu_usage,
            self.memory_usage
        )
    }
}
