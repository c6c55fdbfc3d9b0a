//! World generation
pub mod classifier;
pub mod generator;
pub mod loader;

pub use classifier::ColumnClassifier;
pub use generator::TerrainGenerator;
pub use loader::ChunkLoader;
