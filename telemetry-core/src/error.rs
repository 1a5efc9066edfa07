use std::path::PathBuf;

/// Errors surfaced by the sink and the offline reader
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TelemetryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Why a stored telemetry line could not be read back
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("missing field marker `{0}`")]
    MissingMarker(&'static str),
    #[error("unterminated field `{0}`")]
    Unterminated(&'static str),
    #[error("invalid number for `{field}`: {value}")]
    InvalidNumber { field: &'static str, value: String },
}
