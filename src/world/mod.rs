pub mod block;
pub mod chunk_coord;
pub mod edits;
pub mod events;
pub mod storage;
pub mod voxel_world;

// Re-export commonly used types
pub use block::{BlockError, BlockFlags, BlockType};
pub use chunk_coord::ChunkCoord;
pub use edits::{EditLog, PlacedBlock};
pub use events::{BlockEvent, EventHub};
pub use storage::{
    load_placed_blocks, save_placed_blocks, FileStore, KeyValueStore, MemoryStore, StorageError,
    PLACED_BLOCKS_KEY,
};
pub use voxel_world::{GeneratedChunkSet, VoxelWorld};
