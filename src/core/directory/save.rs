use std::path::{Path, PathBuf};

use tracing::debug;

use super::filenames;
use crate::core::error::{ApiError, ApiResult};

const PLAYERS_DIR: &str = "players";
const PLAYERDATA_DIR: &str = "playerdata";

/// A validated save root: a directory holding a `level.dat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDirectory {
    root: PathBuf,
}

impl SaveDirectory {
    /// Resolve `path` to the save that contains it.
    ///
    /// Accepts the save root itself, its `level.dat`, or anything nested
    /// inside the save (e.g. a region file). Walks up the ancestors until a
    /// directory with a `level.dat` file is found.
    pub async fn from(path: &Path) -> ApiResult<Self> {
        let mut current = Some(path);

        while let Some(candidate) = current {
            if is_save_root(candidate).await {
                debug!("Resolved save directory {:?} from {:?}", candidate, path);
                return Ok(Self {
                    root: candidate.to_path_buf(),
                });
            }
            current = candidate.parent();
        }

        Err(ApiError::SaveNotFound(path.to_path_buf()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn level_dat(&self) -> PathBuf {
        filenames::level_dat(&self.root)
    }

    /// Per-player files of pre-1.7.6 saves.
    pub fn players(&self) -> PathBuf {
        self.root.join(PLAYERS_DIR)
    }

    /// Per-player files keyed by UUID.
    pub fn playerdata(&self) -> PathBuf {
        self.root.join(PLAYERDATA_DIR)
    }
}

async fn is_save_root(candidate: &Path) -> bool {
    let is_dir = matches!(tokio::fs::metadata(candidate).await, Ok(m) if m.is_dir());
    if !is_dir {
        return false;
    }

    matches!(
        tokio::fs::metadata(filenames::level_dat(candidate)).await,
        Ok(m) if m.is_file()
    )
}
