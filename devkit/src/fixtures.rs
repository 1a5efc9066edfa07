/*!
Fixtures d'assets statiques

Crée un répertoire temporaire contenant les pages et assets servis par le
kernel, avec un contenu reconnaissable par fichier.
*/

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fichiers servis par le kernel
pub const ASSET_FILES: [&str; 6] = [
    "index.html",
    "dash.html",
    "analysis.html",
    "how it works.html",
    "styles.css",
    "script.js",
];

/// Répertoire temporaire peuplé d'assets, supprimé au drop
pub struct AssetFixture {
    dir: TempDir,
}

impl AssetFixture {
    /// Tous les assets présents
    pub fn complete() -> Result<Self> {
        Self::with_files(&ASSET_FILES)
    }

    /// Seulement les fichiers listés
    pub fn with_files(files: &[&str]) -> Result<Self> {
        let dir = tempfile::tempdir()?;
        for name in files {
            std::fs::write(dir.path().join(name), Self::body_for(name))?;
        }
        tracing::debug!(root = %dir.path().display(), count = files.len(), "asset fixture ready");
        Ok(Self { dir })
    }

    /// Contenu écrit pour `name`
    pub fn body_for(name: &str) -> String {
        match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some("css") => format!("/* {name} */\nbody {{ margin: 0; }}\n"),
            Some("js") => format!("// {name}\nconsole.log('telemetry');\n"),
            _ => format!("<!doctype html>\n<html><body><h1>{name}</h1></body></html>\n"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        std::fs::remove_file(self.path_of(name))?;
        Ok(())
    }
}
