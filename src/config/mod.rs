pub mod chunksys;
pub mod core;
pub mod worldgen;

pub use chunksys::ChunkSysConfig;
pub use core::{ConfigError, EngineConfig};
pub use worldgen::{BandConfig, DetailTerm, FractalTerm, WorldGenConfig};
