// ─── Mojang API ───
// Facade over the selected installation profile, its interface handle and
// world creation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::directory::{
    filenames, DotMinecraftDirectory, ProfileDirectory, SaveDirectory, VersionDirectory,
    UNKNOWN_VERSION_ID,
};
use crate::core::error::{ApiError, ApiResult};
use crate::core::interface::{InterfaceFactory, MinecraftInterface};
use crate::core::version::{RecognisedVersion, VersionCatalog};
use crate::core::world::active::EpochClock;
use crate::core::world::{ActiveWorld, WorldBuilder, WorldSeed, WorldType};

/// Profile and interface handle, always replaced together.
#[derive(Debug, Clone, Default)]
struct Selection {
    profile: Option<ProfileDirectory>,
    interface: Option<Arc<dyn MinecraftInterface>>,
}

/// Entry point for creating worlds against a local Minecraft installation.
///
/// Starts with no interface. `select` with a version directory makes it
/// ready; `select` without one clears the interface again. Only one world can
/// be driven at a time: every selection or world creation makes previously
/// returned worlds stale.
pub struct MojangApi<B: WorldBuilder> {
    world_builder: B,
    interface_factory: Arc<dyn InterfaceFactory>,
    dot_minecraft: DotMinecraftDirectory,
    version_catalog: VersionCatalog,
    preferred_json: Option<PathBuf>,
    selection: RwLock<Selection>,
    epoch: Arc<EpochClock>,
}

impl<B: WorldBuilder> MojangApi<B> {
    pub fn new(
        world_builder: B,
        interface_factory: Arc<dyn InterfaceFactory>,
        dot_minecraft: DotMinecraftDirectory,
        version_catalog: VersionCatalog,
        preferred_json: Option<PathBuf>,
    ) -> Self {
        Self {
            world_builder,
            interface_factory,
            dot_minecraft,
            version_catalog,
            preferred_json,
            selection: RwLock::new(Selection::default()),
            epoch: Arc::new(EpochClock::default()),
        }
    }

    pub fn dot_minecraft(&self) -> &DotMinecraftDirectory {
        &self.dot_minecraft
    }

    pub fn version_catalog(&self) -> &VersionCatalog {
        &self.version_catalog
    }

    pub fn preferred_json(&self) -> Option<&Path> {
        self.preferred_json.as_deref()
    }

    pub fn selected_profile(&self) -> Option<ProfileDirectory> {
        self.selection.read().profile.clone()
    }

    /// Select a profile and, optionally, the version whose interface to load.
    ///
    /// The previous interface is dropped without shutdown. If loading the
    /// new interface fails, the previous selection is kept.
    pub async fn select(
        &self,
        profile: Option<ProfileDirectory>,
        version: Option<&VersionDirectory>,
    ) -> ApiResult<()> {
        let interface = match version {
            Some(version) => Some(version.create_interface(self.interface_factory.as_ref()).await?),
            None => None,
        };

        let mut selection = self.selection.write();
        *selection = Selection { profile, interface };
        self.epoch.advance();
        Ok(())
    }

    /// `versions/<id>/<id>.jar` plus its JSON, or the preferred JSON if set.
    pub fn create_version_directory(&self, version_id: &str) -> VersionDirectory {
        let versions = self.dot_minecraft.versions();
        let jar = filenames::client_jar_file(&versions, version_id);
        let json = filenames::client_json_file(&versions, version_id);
        self.do_create_version_directory(version_id, jar, json)
    }

    /// A jar/json pair from arbitrary paths, tagged as the unknown version.
    pub fn create_version_directory_from_files(&self, jar: PathBuf, json: PathBuf) -> VersionDirectory {
        self.do_create_version_directory(UNKNOWN_VERSION_ID, jar, json)
    }

    fn do_create_version_directory(&self, version_id: &str, jar: PathBuf, json: PathBuf) -> VersionDirectory {
        let json = self.preferred_json.clone().unwrap_or(json);
        VersionDirectory::new(self.dot_minecraft.clone(), version_id, jar, json)
    }

    pub fn saves(&self) -> PathBuf {
        match &self.selection.read().profile {
            Some(profile) => profile.saves(),
            None => self.dot_minecraft.saves(),
        }
    }

    pub fn can_create_world(&self) -> bool {
        self.selection.read().interface.is_some()
    }

    pub async fn create_world_from_seed(
        &self,
        seed: WorldSeed,
        world_type: WorldType,
    ) -> ApiResult<ActiveWorld<B::World>> {
        let (interface, epoch) = self.claim_interface()?;
        let world = self
            .world_builder
            .from_seed(interface, seed, world_type)
            .await?;
        Ok(ActiveWorld::new(world, epoch, self.epoch.clone()))
    }

    pub async fn create_world_from_file(&self, path: &Path) -> ApiResult<ActiveWorld<B::World>> {
        if !self.can_create_world() {
            return Err(ApiError::NotReady);
        }
        let save = SaveDirectory::from(path).await?;
        let (interface, epoch) = self.claim_interface()?;
        let world = self.world_builder.from_file(interface, save).await?;
        Ok(ActiveWorld::new(world, epoch, self.epoch.clone()))
    }

    pub fn recognised_version_name(&self) -> &'static str {
        match &self.selection.read().interface {
            Some(interface) => interface.recognised_version().name(),
            None => RecognisedVersion::UNKNOWN.name(),
        }
    }

    /// Take the active handle and start a new epoch for the world built on it.
    ///
    /// Runs under the write guard, like `select`, so a world's epoch is never
    /// older than the handle it was built on. The guard is released before
    /// any await in the callers.
    fn claim_interface(&self) -> ApiResult<(Arc<dyn MinecraftInterface>, u64)> {
        let selection = self.selection.write();
        let interface = selection.interface.clone().ok_or(ApiError::NotReady)?;
        Ok((interface, self.epoch.advance()))
    }
}
