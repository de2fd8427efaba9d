// ─── Minecraft Interface ───
// The live binding into a loaded game version, and how one is obtained.

pub mod local;

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::directory::VersionDirectory;
use crate::core::error::ApiResult;
use crate::core::version::RecognisedVersion;

pub use local::{LocalInterfaceFactory, LocalMinecraftInterface};

/// Handle into a loaded engine version. World builders drive it.
pub trait MinecraftInterface: Debug + Send + Sync {
    fn recognised_version(&self) -> RecognisedVersion;
}

/// Turns a [`VersionDirectory`] into a live interface handle.
#[async_trait]
pub trait InterfaceFactory: Send + Sync {
    async fn create(&self, version: &VersionDirectory) -> ApiResult<Arc<dyn MinecraftInterface>>;
}
