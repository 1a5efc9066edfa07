//! TELEMETRY KERNEL - Serveur HTTP du dashboard de télémétrie
//!
//! RÔLE : pages statiques + API /api/telemetry (mesures synthétiques).
//! Aucun lien avec le fichier écrit par le batch : l'API génère à la volée.

pub mod assets;
pub mod config;
pub mod http;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

pub use config::{load_config, KernelConfig};
pub use http::{build_router, AppState};

/// Pages annoncées au démarrage
pub const ANNOUNCED_PAGES: [(&str, &str); 4] = [
    ("/", "Landing Page"),
    ("/dash.html", "Dashboard"),
    ("/analysis.html", "Analytics"),
    ("/how%20it%20works.html", "How It Works"),
];

/// Lignes console listant les pages servies sur `port`
pub fn page_banner(port: u16) -> Vec<String> {
    let mut lines = vec![
        format!("Telemetry Server started on http://localhost:{port}"),
        format!("Open http://localhost:{port} in your browser"),
        "Available pages:".to_string(),
    ];
    lines.extend(
        ANNOUNCED_PAGES
            .iter()
            .map(|(path, label)| format!("  - http://localhost:{port}{path} ({label})")),
    );
    lines
}

/// Bind + serve jusqu'à l'arrêt du process
pub async fn run(cfg: KernelConfig) -> Result<()> {
    let addr = cfg.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr().context("listener has no local address")?;

    info!(addr = %local, root = %cfg.static_root.display(), "[kernel] listening");
    for line in page_banner(local.port()) {
        println!("{line}");
    }

    let app = build_router(AppState::new(cfg.static_root.clone()));
    axum::serve(listener, app).await.context("HTTP server stopped")?;
    Ok(())
}
