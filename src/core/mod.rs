// ─── Map Viewer Core ───
// World-creation backend for a Minecraft map viewer.
//
// Architecture:
//   core/
//     directory/  — .minecraft, profile, version and save layouts
//     version/    — Version catalog, version JSON, recognised versions
//     interface/  — Interface handle trait + local jar loader
//     world/      — Seeds, world types, builder seam, epoch-tagged worlds
//     api         — The world-creation facade
//     player      — Move-player menu model
//     settings    — Persisted viewer settings

pub mod api;
pub mod directory;
pub mod error;
pub mod interface;
pub mod player;
pub mod settings;
pub mod version;
pub mod world;
