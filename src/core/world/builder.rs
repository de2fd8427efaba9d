use std::sync::Arc;

use async_trait::async_trait;

use super::{WorldSeed, WorldType};
use crate::core::directory::SaveDirectory;
use crate::core::error::ApiResult;
use crate::core::interface::MinecraftInterface;

/// Builds worlds through a live interface handle.
///
/// Implementations own the actual generation and save parsing. The facade
/// only decides which handle they receive.
#[async_trait]
pub trait WorldBuilder: Send + Sync {
    type World: Send;

    async fn from_seed(
        &self,
        interface: Arc<dyn MinecraftInterface>,
        seed: WorldSeed,
        world_type: WorldType,
    ) -> ApiResult<Self::World>;

    async fn from_file(
        &self,
        interface: Arc<dyn MinecraftInterface>,
        save: SaveDirectory,
    ) -> ApiResult<Self::World>;
}
