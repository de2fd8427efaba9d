// ─── Version File ───
// The metadata JSON that sits next to a client jar.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::error::{ApiError, ApiResult};

/// The parts of a Mojang version JSON the viewer cares about.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionJson {
    pub id: Option<String>,
    #[serde(default)]
    pub main_class: Option<String>,
    #[serde(default, rename = "type")]
    pub version_type: Option<String>,
    #[serde(default)]
    pub release_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub inherits_from: Option<String>,
    #[serde(default)]
    pub downloads: Option<VersionDownloads>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionDownloads {
    pub client: Option<DownloadArtifact>,
    #[serde(default)]
    pub server: Option<DownloadArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DownloadArtifact {
    pub sha1: String,
    pub size: u64,
    pub url: String,
}

impl VersionJson {
    /// Read and parse a version JSON from disk.
    pub async fn read(path: &Path) -> ApiResult<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ApiError::io(path, e))?;
        let version_json: VersionJson = serde_json::from_str(&raw)?;
        Ok(version_json)
    }

    /// Expected SHA-1 of the client jar, when the JSON carries one.
    pub fn client_sha1(&self) -> Option<&str> {
        self.downloads
            .as_ref()?
            .client
            .as_ref()
            .map(|c| c.sha1.as_str())
    }
}
