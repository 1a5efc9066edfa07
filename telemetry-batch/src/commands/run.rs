use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing::{error, info, warn};

use telemetry_core::{
    collect, sink, Batch, CancelSignal, Generator, RandomSource, DEFAULT_BATCH_SIZE, OUTPUT_FILE,
    SAMPLE_DELAY,
};

/// Settings of one batch run; production values come from `telemetry_core`
pub struct RunInputs<'a> {
    pub count: usize,
    pub delay: Duration,
    pub output: &'a Path,
}

impl Default for RunInputs<'static> {
    fn default() -> Self {
        Self { count: DEFAULT_BATCH_SIZE, delay: SAMPLE_DELAY, output: Path::new(OUTPUT_FILE) }
    }
}

pub async fn execute() -> Result<()> {
    let cancel = CancelSignal::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, skipping remaining sampling delays");
            on_ctrl_c.cancel();
        }
    });

    run_batch(Generator::from_entropy(), &RunInputs::default(), &cancel).await;
    Ok(())
}

/// Collects, prints and persists. Write errors are logged, never returned.
pub async fn run_batch<S: RandomSource>(
    mut generator: Generator<S>,
    inputs: &RunInputs<'_>,
    cancel: &CancelSignal,
) -> Batch {
    println!("Processing Telemetry Data...\n");

    let batch = collect(&mut generator, inputs.count, inputs.delay, cancel).await;
    if batch.interrupted {
        info!(count = batch.len(), "batch finished after interruption");
    }

    for reading in batch.readings() {
        println!("{reading}");
    }

    match sink::write_all(batch.readings(), inputs.output) {
        Ok(()) => println!("Processed telemetry data saved to {}", inputs.output.display()),
        Err(e) => error!("Error writing to file: {e}"),
    }

    batch
}
