//! TELEMETRY KERNEL - Point d'entrée
//!
//! Charge .env puis kernel.yaml (facultatifs), initialise le logging et sert
//! le dashboard jusqu'à l'arrêt externe du process.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env facultatif (RUST_LOG, TELEMETRY_KERNEL_CONFIG)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = telemetry_kernel::load_config().await;
    telemetry_kernel::run(cfg).await
}
