use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::api::MojangApi;
use crate::core::directory::{DotMinecraftDirectory, ProfileDirectory};
use crate::core::error::{ApiError, ApiResult};
use crate::core::interface::InterfaceFactory;
use crate::core::version::VersionCatalog;
use crate::core::world::WorldBuilder;

const APP_DIR_NAME: &str = "MapView";
const SETTINGS_FILE: &str = "viewer_settings.json";

/// Persisted viewer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerSettings {
    pub dot_minecraft_dir: Option<PathBuf>,
    /// Version JSON used instead of every version's own metadata file.
    pub preferred_version_json: Option<PathBuf>,
    pub last_profile_dir: Option<PathBuf>,
    pub last_version_id: Option<String>,
}

impl ViewerSettings {
    /// Load from `dir`, falling back to defaults if missing or unreadable.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(SETTINGS_FILE);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings at {:?}, using defaults", path);
                return Self::default();
            }
            Err(e) => {
                warn!("Cannot read {:?}: {}", path, e);
                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Corrupt settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, dir: &Path) -> ApiResult<()> {
        std::fs::create_dir_all(dir).map_err(|e| ApiError::io(dir, e))?;
        let path = dir.join(SETTINGS_FILE);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|e| ApiError::io(&path, e))?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Build a facade for the configured installation, which must contain a
    /// `versions` folder. The facade starts with no interface; see
    /// [`ViewerSettings::restore_selection`].
    pub fn build_api<B: WorldBuilder>(
        &self,
        world_builder: B,
        interface_factory: Arc<dyn InterfaceFactory>,
        version_catalog: VersionCatalog,
    ) -> ApiResult<MojangApi<B>> {
        let dot_minecraft = self
            .dot_minecraft_dir
            .clone()
            .ok_or_else(|| ApiError::Other("No .minecraft directory configured".into()))?;

        let dot_minecraft = DotMinecraftDirectory::new(dot_minecraft);
        if !dot_minecraft.is_valid() {
            return Err(ApiError::Other(format!(
                "Not a .minecraft directory (no versions folder): {:?}",
                dot_minecraft.root()
            )));
        }

        Ok(MojangApi::new(
            world_builder,
            interface_factory,
            dot_minecraft,
            version_catalog,
            self.preferred_version_json.clone(),
        ))
    }

    /// Re-select the last used profile and version.
    pub async fn restore_selection<B: WorldBuilder>(&self, api: &MojangApi<B>) -> ApiResult<()> {
        let profile = self.last_profile_dir.clone().map(ProfileDirectory::new);
        let version = self
            .last_version_id
            .as_deref()
            .map(|id| api.create_version_directory(id));
        api.select(profile, version.as_ref()).await
    }
}

/// Per-user directory holding the settings file.
pub fn default_settings_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
