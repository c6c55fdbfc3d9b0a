pub mod config;
pub mod engine;
pub mod noise;
pub mod terrain;
pub mod world;

// Re-export commonly used types
pub use config::chunksys::ChunkSysConfig;
pub use config::core::EngineConfig;
pub use config::worldgen::{BandConfig, WorldGenConfig};
pub use engine::VoxelEngine;
pub use noise::{fractal_noise, noise2d, NoiseProfile};
pub use terrain::{ChunkLoader, ColumnClassifier, TerrainGenerator};
pub use world::block::BlockType;
pub use world::chunk_coord::ChunkCoord;
pub use world::events::BlockEvent;
pub use world::storage::{FileStore, KeyValueStore, MemoryStore};
pub use world::voxel_world::VoxelWorld;
