pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::api::MojangApi;
pub use crate::core::error::{ApiError, ApiResult};
pub use crate::core::world::{ActiveWorld, WorldBuilder, WorldSeed, WorldType};

/// Install the structured logger. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mapview_core=debug")),
        )
        .try_init();
}
