// ─── World Creation ───
// Seeds, generator presets and the builder seam behind the facade.

pub mod active;
pub mod builder;
pub mod seed;
pub mod world_type;

pub use active::ActiveWorld;
pub use builder::WorldBuilder;
pub use seed::{SeedOrigin, WorldSeed};
pub use world_type::WorldType;
