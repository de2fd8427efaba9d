// ─── Directory Layout ───
// On-disk structure of a Minecraft installation, its profiles, versions and saves.

pub mod dot_minecraft;
pub mod filenames;
pub mod profile;
pub mod save;
pub mod version;

pub use dot_minecraft::DotMinecraftDirectory;
pub use profile::ProfileDirectory;
pub use save::SaveDirectory;
pub use version::{VersionDirectory, UNKNOWN_VERSION_ID};
