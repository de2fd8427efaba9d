use std::path::{Path, PathBuf};

use super::filenames::{SAVES_DIR, VERSIONS_DIR};

/// Root `.minecraft` data directory. Read-only from the viewer's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotMinecraftDirectory {
    root: PathBuf,
}

impl DotMinecraftDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn versions(&self) -> PathBuf {
        self.root.join(VERSIONS_DIR)
    }

    /// Default saves location, used when no profile is selected.
    pub fn saves(&self) -> PathBuf {
        self.root.join(SAVES_DIR)
    }

    pub fn is_valid(&self) -> bool {
        self.root.is_dir() && self.versions().is_dir()
    }
}
