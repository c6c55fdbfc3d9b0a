use serde::{Deserialize, Serialize};

/// Loading policy: how far around a viewer chunks are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSysConfig {
    /// Chebyshev radius, in chunks, kept loaded around the viewer.
    pub load_radius: i32,
    /// Radius preloaded around the spawn point before interaction starts.
    pub preload_radius: i32,
    /// Chunks generated between progress callbacks during preload.
    pub preload_batch: usize,
}

impl Default for ChunkSysConfig {
    fn default() -> Self {
        Self {
            load_radius: 1,
            preload_radius: 3,
            preload_batch: 5,
        }
    }
}
