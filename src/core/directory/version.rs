use std::path::{Path, PathBuf};
use std::sync::Arc;

use sha1::{Digest, Sha1};
use tracing::debug;

use super::DotMinecraftDirectory;
use crate::core::error::{ApiError, ApiResult};
use crate::core::interface::{InterfaceFactory, MinecraftInterface};

/// Version id used when a jar/json pair is loaded from arbitrary paths.
pub const UNKNOWN_VERSION_ID: &str = "unknown";

/// A resolved game version: client jar plus its metadata file.
///
/// Built on demand by the facade and dropped once the interface handle has
/// been created from it.
#[derive(Debug, Clone)]
pub struct VersionDirectory {
    dot_minecraft: DotMinecraftDirectory,
    version_id: String,
    jar: PathBuf,
    json: PathBuf,
}

impl VersionDirectory {
    pub fn new(
        dot_minecraft: DotMinecraftDirectory,
        version_id: impl Into<String>,
        jar: PathBuf,
        json: PathBuf,
    ) -> Self {
        Self {
            dot_minecraft,
            version_id: version_id.into(),
            jar,
            json,
        }
    }

    pub fn dot_minecraft(&self) -> &DotMinecraftDirectory {
        &self.dot_minecraft
    }

    pub fn version_id(&self) -> &str {
        &self.version_id
    }

    pub fn jar(&self) -> &Path {
        &self.jar
    }

    pub fn json(&self) -> &Path {
        &self.json
    }

    pub async fn is_valid(&self) -> bool {
        is_file(&self.jar).await && is_file(&self.json).await
    }

    /// Build the native interface handle for this version.
    pub async fn create_interface(
        &self,
        factory: &dyn InterfaceFactory,
    ) -> ApiResult<Arc<dyn MinecraftInterface>> {
        factory.create(self).await
    }

    /// Compare the client jar against a catalog SHA-1 (lowercase hex).
    pub async fn verify_jar_sha1(&self, expected: &str) -> ApiResult<()> {
        let bytes = tokio::fs::read(&self.jar)
            .await
            .map_err(|e| ApiError::io(&self.jar, e))?;

        let actual = hex::encode(Sha1::digest(&bytes));
        if !actual.eq_ignore_ascii_case(expected) {
            return Err(ApiError::Sha1Mismatch {
                path: self.jar.clone(),
                expected: expected.to_string(),
                actual,
            });
        }

        debug!("Verified {:?} ({})", self.jar, actual);
        Ok(())
    }
}

async fn is_file(path: &Path) -> bool {
    matches!(tokio::fs::metadata(path).await, Ok(m) if m.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir_with_jar(contents: &[u8]) -> (tempfile::TempDir, VersionDirectory) {
        let tmp = tempfile::tempdir().unwrap();
        let jar = tmp.path().join("client.jar");
        let json = tmp.path().join("client.json");
        std::fs::write(&jar, contents).unwrap();
        std::fs::write(&json, "{}").unwrap();
        let dir = VersionDirectory::new(
            DotMinecraftDirectory::new(tmp.path()),
            "1.12",
            jar,
            json,
        );
        (tmp, dir)
    }

    #[tokio::test]
    async fn validity_requires_both_files() {
        let (_tmp, dir) = dir_with_jar(b"jar");
        assert!(dir.is_valid().await);

        std::fs::remove_file(dir.json()).unwrap();
        assert!(!dir.is_valid().await);

        // A directory where the jar should be does not count.
        let (_tmp, dir) = dir_with_jar(b"jar");
        std::fs::remove_file(dir.jar()).unwrap();
        std::fs::create_dir_all(dir.jar()).unwrap();
        assert!(!dir.is_valid().await);
    }

    #[tokio::test]
    async fn jar_sha1_accepts_matching_digest() {
        // sha1("abc")
        let (_tmp, dir) = dir_with_jar(b"abc");
        dir.verify_jar_sha1("a9993e364706816aba3e25717850c26c9cd0d89d")
            .await
            .unwrap();
        dir.verify_jar_sha1("A9993E364706816ABA3E25717850C26C9CD0D89D")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn jar_sha1_rejects_other_digest() {
        let (_tmp, dir) = dir_with_jar(b"abc");
        let err = dir
            .verify_jar_sha1("0000000000000000000000000000000000000000")
            .await
            .unwrap_err();
        match err {
            ApiError::Sha1Mismatch { actual, .. } => {
                assert_eq!(actual, "a9993e364706816aba3e25717850c26c9cd0d89d")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
