pub mod catalog;
pub mod recognised;
pub mod version_file;

pub use catalog::{CatalogEntry, VersionCatalog, VersionKind};
pub use recognised::RecognisedVersion;
pub use version_file::{DownloadArtifact, VersionDownloads, VersionJson};
