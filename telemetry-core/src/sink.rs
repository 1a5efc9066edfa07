use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::TelemetryError;
use crate::models::Reading;

/// File body for `readings`: one newline-terminated line each
pub fn render_lines(readings: &[Reading]) -> String {
    readings.iter().map(|r| format!("{r}\n")).collect()
}

/// Writes every reading to `path`, replacing whatever was there.
/// Not transactional: on failure the file may hold a prefix of the lines.
pub fn write_all(readings: &[Reading], path: impl AsRef<Path>) -> Result<(), TelemetryError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| TelemetryError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for reading in readings {
        writeln!(writer, "{reading}").map_err(|e| TelemetryError::io(path, e))?;
    }
    writer.flush().map_err(|e| TelemetryError::io(path, e))?;

    info!(path = %path.display(), lines = readings.len(), "telemetry written");
    Ok(())
}
