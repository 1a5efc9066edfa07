use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use telemetry_core::{parser, ReadingRecord};

/// Prints the well-formed readings of `input` as pretty JSON
pub fn execute(input: &Path) -> Result<()> {
    let records = load(input)?;
    println!("{}", render(&records)?);
    Ok(())
}

fn load(input: &Path) -> Result<Vec<ReadingRecord>> {
    let records = parser::read_records(input)
        .with_context(|| format!("import {}", input.display()))?;
    info!(path = %input.display(), count = records.len(), "telemetry imported");
    Ok(records)
}

fn render(records: &[ReadingRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("serialize imported readings")
}
