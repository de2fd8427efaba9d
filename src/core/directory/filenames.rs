//! Path composition rules. No existence checks happen here.

use std::path::{Path, PathBuf};

pub const VERSIONS_DIR: &str = "versions";
pub const SAVES_DIR: &str = "saves";
pub const LEVEL_DAT: &str = "level.dat";

/// `versions/<id>/<id>.jar`
pub fn client_jar_file(versions: &Path, version_id: &str) -> PathBuf {
    versions
        .join(version_id)
        .join(format!("{}.jar", version_id))
}

/// `versions/<id>/<id>.json`
pub fn client_json_file(versions: &Path, version_id: &str) -> PathBuf {
    versions
        .join(version_id)
        .join(format!("{}.json", version_id))
}

pub fn level_dat(save_root: &Path) -> PathBuf {
    save_root.join(LEVEL_DAT)
}
