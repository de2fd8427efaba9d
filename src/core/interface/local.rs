use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::{InterfaceFactory, MinecraftInterface};
use crate::core::directory::VersionDirectory;
use crate::core::error::{ApiError, ApiResult};
use crate::core::version::{RecognisedVersion, VersionJson};

/// Interface backed by a client jar on the local disk.
#[derive(Debug)]
pub struct LocalMinecraftInterface {
    recognised_version: RecognisedVersion,
    jar: PathBuf,
    version_json: VersionJson,
}

impl LocalMinecraftInterface {
    pub fn jar(&self) -> &Path {
        &self.jar
    }

    pub fn version_json(&self) -> &VersionJson {
        &self.version_json
    }
}

impl MinecraftInterface for LocalMinecraftInterface {
    fn recognised_version(&self) -> RecognisedVersion {
        self.recognised_version
    }
}

/// Loads [`LocalMinecraftInterface`]s from version directories.
#[derive(Debug, Clone, Default)]
pub struct LocalInterfaceFactory {
    verify_jar: bool,
}

impl LocalInterfaceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also check the client jar against the SHA-1 in its version JSON.
    pub fn verifying() -> Self {
        Self { verify_jar: true }
    }

    pub async fn load(&self, version: &VersionDirectory) -> ApiResult<LocalMinecraftInterface> {
        if !version.is_valid().await {
            return Err(ApiError::InvalidVersionDirectory {
                version_id: version.version_id().to_string(),
                jar: version.jar().to_path_buf(),
                json: version.json().to_path_buf(),
            });
        }

        let version_json = VersionJson::read(version.json()).await?;

        if self.verify_jar {
            match version_json.client_sha1() {
                Some(sha1) => version.verify_jar_sha1(sha1).await?,
                None => debug!("No client SHA-1 in {:?}, skipping check", version.json()),
            }
        }

        let id = version_json.id.as_deref().unwrap_or(version.version_id());
        let mut recognised_version = RecognisedVersion::from_version_id(id);
        if !recognised_version.is_known() {
            recognised_version = RecognisedVersion::from_version_id(version.version_id());
        }

        info!(
            "Loaded minecraft interface for '{}' (recognised as {})",
            version.version_id(),
            recognised_version
        );

        Ok(LocalMinecraftInterface {
            recognised_version,
            jar: version.jar().to_path_buf(),
            version_json,
        })
    }
}

#[async_trait]
impl InterfaceFactory for LocalInterfaceFactory {
    async fn create(&self, version: &VersionDirectory) -> ApiResult<Arc<dyn MinecraftInterface>> {
        let interface = self.load(version).await?;
        Ok(Arc::new(interface))
    }
}
