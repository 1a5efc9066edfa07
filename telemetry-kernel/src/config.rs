use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

pub const CONFIG_ENV: &str = "TELEMETRY_KERNEL_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "kernel.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct KernelConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Répertoire des pages et assets (index.html, styles.css...)
    pub static_root: PathBuf,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            static_root: PathBuf::from("."),
        }
    }
}

impl KernelConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Charge `kernel.yaml` (ou `$TELEMETRY_KERNEL_CONFIG`), défauts sinon
pub async fn load_config() -> KernelConfig {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
    load_config_from(Path::new(&path)).await
}

pub async fn load_config_from(path: &Path) -> KernelConfig {
    if !path.exists() {
        info!(path = %path.display(), "no kernel config, using defaults");
        return KernelConfig::default();
    }
    let txt = match fs::read_to_string(path).await {
        Ok(txt) => txt,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable kernel config, using defaults");
            return KernelConfig::default();
        }
    };
    if txt.trim().is_empty() {
        return KernelConfig::default();
    }
    serde_yaml::from_str(&txt).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "invalid kernel config, using defaults");
        KernelConfig::default()
    })
}
