//! Synthetic telemetry sampling
//!
//! Provides the building blocks shared by the kernel and the batch tool:
//! - Reading model and its text / JSON renderings
//! - Sample generator with an injectable random source
//! - Batch processor with a cancellable inter-sample delay
//! - Line-oriented text sink and its offline parser

pub mod batch;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod sink;

pub use batch::{collect, Batch, CancelSignal};
pub use error::{ParseError, TelemetryError};
pub use generator::{EntropySource, Generator, RandomSource, UsageRange, CPU_RANGE, MEMORY_RANGE};
pub use models::{Reading, ReadingRecord};

use std::time::Duration;

/// Readings produced by one batch run
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Readings returned by each `/api/telemetry` call
pub const API_BATCH_SIZE: usize = 5;

/// Simulated sampling period between two batch readings
pub const SAMPLE_DELAY: Duration = Duration::from_millis(500);

/// Batch output, relative to the working directory
pub const OUTPUT_FILE: &str = "telemetry_output.txt";
