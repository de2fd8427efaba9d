// ─── Version Catalog ───
// Known game versions with the download metadata of their version JSON.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Immutable list of known versions, supplied when the facade is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionCatalog {
    pub versions: Vec<CatalogEntry>,
}

/// A single entry in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VersionKind,
    #[serde(rename = "releaseTime")]
    pub release_time: DateTime<Utc>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub sha1: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VersionKind {
    Release,
    Snapshot,
    OldBeta,
    OldAlpha,
    #[serde(other)]
    Other,
}

impl VersionCatalog {
    pub fn new(versions: Vec<CatalogEntry>) -> Self {
        Self { versions }
    }

    /// Find a specific version entry by ID (e.g. "1.12").
    pub fn find_version(&self, id: &str) -> Option<&CatalogEntry> {
        self.versions.iter().find(|v| v.id == id)
    }

    pub fn releases(&self) -> Vec<&CatalogEntry> {
        self.versions
            .iter()
            .filter(|v| v.kind == VersionKind::Release)
            .collect()
    }

    pub fn latest_release(&self) -> Option<&CatalogEntry> {
        self.versions
            .iter()
            .filter(|v| v.kind == VersionKind::Release)
            .max_by_key(|v| v.release_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> VersionCatalog {
        serde_json::from_value(serde_json::json!({
            "versions": [
                { "id": "17w06a", "type": "snapshot", "releaseTime": "2017-02-08T13:16:29+00:00" },
                { "id": "1.12", "type": "release", "releaseTime": "2017-06-02T13:50:27+00:00",
                  "url": "https://example.com/1.12.json", "sha1": "abc123" },
                { "id": "1.11.2", "type": "release", "releaseTime": "2016-12-21T09:29:12+00:00" },
                { "id": "b1.7.3", "type": "old_beta", "releaseTime": "2011-07-07T22:00:00+00:00" },
                { "id": "exp", "type": "pending", "releaseTime": "2011-07-07T22:00:00+00:00" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn deserialize_catalog_entry() {
        let catalog = catalog();
        let entry = catalog.find_version("1.12").unwrap();
        assert_eq!(entry.kind, VersionKind::Release);
        assert_eq!(entry.sha1.as_deref(), Some("abc123"));
        assert_eq!(catalog.find_version("exp").unwrap().kind, VersionKind::Other);
        assert!(catalog.find_version("1.99").is_none());
    }

    #[test]
    fn releases_and_latest_release() {
        let catalog = catalog();
        let ids: Vec<_> = catalog.releases().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["1.12", "1.11.2"]);
        assert_eq!(catalog.latest_release().unwrap().id, "1.12");
    }
}
