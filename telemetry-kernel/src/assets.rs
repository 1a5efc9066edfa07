//! Pages et assets statiques lus depuis `static_root`.
//!
//! Un fichier absent donne un 404 texte qui nomme le fichier ; les autres
//! erreurs de lecture donnent un 500. Les octets sont renvoyés tels quels.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub file: &'static str,
    pub content_type: &'static str,
}

pub const INDEX_PAGE: Asset = Asset::html("index.html");
pub const DASHBOARD_PAGE: Asset = Asset::html("dash.html");
pub const ANALYSIS_PAGE: Asset = Asset::html("analysis.html");
pub const HOW_IT_WORKS_PAGE: Asset = Asset::html("how it works.html");
pub const STYLESHEET: Asset = Asset { file: "styles.css", content_type: "text/css" };
pub const SCRIPT: Asset = Asset { file: "script.js", content_type: "application/javascript" };

impl Asset {
    const fn html(file: &'static str) -> Self {
        Self { file, content_type: "text/html" }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("File not found: {0}")]
    NotFound(&'static str),
    #[error("Failed to read {file}: {source}")]
    Read {
        file: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        let status = match self {
            AssetError::NotFound(_) => StatusCode::NOT_FOUND,
            AssetError::Read { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], self.to_string()).into_response()
    }
}

pub async fn load(root: &Path, asset: Asset) -> Result<Vec<u8>, AssetError> {
    let path = root.join(asset.file);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AssetError::NotFound(asset.file)),
        Err(source) => Err(AssetError::Read { file: asset.file, source }),
    }
}

/// Réponse complète pour un asset : 200 + Content-Type + CORS, ou l'erreur
pub async fn serve(root: &Path, asset: Asset) -> Response {
    match load(root, asset).await {
        Ok(bytes) => {
            debug!(file = asset.file, bytes = bytes.len(), "serving asset");
            (
                [
                    (header::CONTENT_TYPE, asset.content_type),
                    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            match &e {
                AssetError::NotFound(file) => debug!(file, "asset missing"),
                AssetError::Read { .. } => error!(error = %e, "asset read failed"),
            }
            e.into_response()
        }
    }
}
