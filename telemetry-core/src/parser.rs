//! Offline reader for files produced by the sink.
//!
//! Nothing on the HTTP side reads these files; this is an import helper.
//! Lines that do not match the sink format are skipped and logged.

use std::path::Path;
use tracing::warn;

use crate::error::{ParseError, TelemetryError};
use crate::models::ReadingRecord;

const TIME_MARKER: &str = "Time: ";
const CPU_MARKER: &str = "CPU Usage: ";
const MEMORY_MARKER: &str = "Memory Usage: ";

/// Parses `Time: <ts> | CPU Usage: <cpu>% | Memory Usage: <mem>%`
pub fn parse_line(line: &str) -> Result<ReadingRecord, ParseError> {
    let time_at = line.find(TIME_MARKER).ok_or(ParseError::MissingMarker(TIME_MARKER))?;
    let cpu_at = line.find(CPU_MARKER).ok_or(ParseError::MissingMarker(CPU_MARKER))?;
    let memory_at = line.find(MEMORY_MARKER).ok_or(ParseError::MissingMarker(MEMORY_MARKER))?;

    let timestamp = field(line, time_at + TIME_MARKER.len(), " |", TIME_MARKER)?;
    let cpu = field(line, cpu_at + CPU_MARKER.len(), "%", CPU_MARKER)?;
    let memory = field(line, memory_at + MEMORY_MARKER.len(), "%", MEMORY_MARKER)?;

    Ok(ReadingRecord {
        timestamp: timestamp.trim().to_string(),
        cpu_usage: number(cpu, CPU_MARKER)?,
        memory_usage: number(memory, MEMORY_MARKER)?,
    })
}

fn field<'a>(line: &'a str, start: usize, end: &str, name: &'static str) -> Result<&'a str, ParseError> {
    let rest = &line[start..];
    let len = rest.find(end).ok_or(ParseError::Unterminated(name))?;
    Ok(&rest[..len])
}

fn number(raw: &str, field: &'static str) -> Result<f64, ParseError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber { field, value: raw.trim().to_string() })
}

/// Parses every well-formed line of `text`, skipping the rest
pub fn parse_lines(text: &str) -> Vec<ReadingRecord> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(n, line)| match parse_line(line) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(line = n + 1, error = %e, "skipping malformed telemetry line");
                None
            }
        })
        .collect()
}

/// Reads a telemetry file written by [`crate::sink::write_all`]
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<ReadingRecord>, TelemetryError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| TelemetryError::io(path, e))?;
    Ok(parse_lines(&text))
}
