use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the world-creation backend.
/// Every module returns `Result<T, ApiError>`.
#[derive(Debug, Error)]
pub enum ApiError {
    // ── State ───────────────────────────────────────────
    #[error("cannot create a world without a minecraft interface")]
    NotReady,

    #[error("world from epoch {created} is stale (current epoch {current})")]
    StaleWorld { created: u64, current: u64 },

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to load save directory: {0:?}")]
    SaveNotFound(PathBuf),

    // ── Version ─────────────────────────────────────────
    #[error("Invalid version directory '{version_id}' (jar {jar:?}, json {json:?})")]
    InvalidVersionDirectory {
        version_id: String,
        jar: PathBuf,
        json: PathBuf,
    },

    // ── Integrity ───────────────────────────────────────
    #[error("SHA-1 mismatch for {path:?}: expected {expected}, got {actual}")]
    Sha1Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Generic ─────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ApiError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(source: std::io::Error) -> Self {
        ApiError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
