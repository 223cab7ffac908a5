//! Data-driven content and loaders.
//!
//! Turns data files into `game-core` values:
//! - Game configuration (TOML) into [`game_core::GameConfig`]
//! - Map layouts with their initial actors (RON) into [`game_core::MapLayout`]
//!
//! Content is consumed when a simulation is built and never appears in brain
//! memories or world state afterwards.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MapFile, MapLoader};
