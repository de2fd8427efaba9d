use std::path::{Path, PathBuf};

use super::filenames::SAVES_DIR;

/// Game directory a launcher profile points to. May differ from `.minecraft`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDirectory {
    root: PathBuf,
}

impl ProfileDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn saves(&self) -> PathBuf {
        self.root.join(SAVES_DIR)
    }
}
