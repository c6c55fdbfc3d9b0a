use crate::world::block::BlockType;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::events::{BlockEvent, EventHub};
use crossbeam_channel::Receiver;
use glam::IVec3;
use std::collections::{HashMap, HashSet};

/// Chunk coordinates that have already been populated by the generator.
///
/// Monotonic: coordinates are only ever added. This set, not the block
/// map, answers "is this region ready": a fully mined-out chunk is still
/// generated, and a chunk with player edits must never be generated again.
#[derive(Debug, Default)]
pub struct GeneratedChunkSet {
    chunks: HashSet<ChunkCoord>,
}

impl GeneratedChunkSet {
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains(&coord)
    }

    /// Returns false when the coordinate was already present.
    pub fn insert(&mut self, coord: ChunkCoord) -> bool {
        self.chunks.insert(coord)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChunkCoord> {
        self.chunks.iter()
    }
}

/// Sparse voxel store: the sole source of truth for world geometry.
///
/// A coordinate is present iff a block exists there; air is absence, never
/// a stored value. Mutations flow through [`set`](Self::set) and
/// [`remove`](Self::remove) so every subscriber sees every change.
pub struct VoxelWorld {
    blocks: HashMap<IVec3, BlockType>,
    generated: GeneratedChunkSet,
    world_size: i32,
    world_height: i32,
    events: EventHub,
}

impl VoxelWorld {
    pub fn new(world_size: i32, world_height: i32) -> Self {
        Self {
            blocks: HashMap::new(),
            generated: GeneratedChunkSet::default(),
            world_size,
            world_height,
            events: EventHub::new(),
        }
    }

    pub fn world_size(&self) -> i32 {
        self.world_size
    }

    pub fn world_height(&self) -> i32 {
        self.world_height
    }

    /// x and z lie in [0, world_size), y in [0, world_height).
    pub fn in_bounds(&self, pos: IVec3) -> bool {
        pos.x >= 0
            && pos.x < self.world_size
            && pos.z >= 0
            && pos.z < self.world_size
            && pos.y >= 0
            && pos.y < self.world_height
    }

    pub fn get(&self, pos: IVec3) -> Option<BlockType> {
        self.blocks.get(&pos).copied()
    }

    /// Inserts or replaces the block at `pos`. Out-of-bounds writes are
    /// silently ignored so the map never grows past the world extent.
    pub fn set(&mut self, pos: IVec3, block: BlockType) -> bool {
        if !self.in_bounds(pos) {
            log::trace!("ignoring out-of-bounds set at {pos}");
            return false;
        }
        self.blocks.insert(pos, block);
        self.events.broadcast(BlockEvent::Set { pos, block });
        true
    }

    /// Like [`set`](Self::set) but never overwrites. Used by decoration so
    /// trees do not clobber terrain or each other.
    pub fn set_if_empty(&mut self, pos: IVec3, block: BlockType) -> bool {
        if self.blocks.contains_key(&pos) {
            return false;
        }
        self.set(pos, block)
    }

    /// Deletes the block at `pos`; a missing entry is a no-op, not an
    /// error.
    pub fn remove(&mut self, pos: IVec3) -> Option<BlockType> {
        let removed = self.blocks.remove(&pos);
        if removed.is_some() {
            self.events.broadcast(BlockEvent::Removed { pos });
        }
        removed
    }

    pub fn subscribe(&mut self) -> Receiver<BlockEvent> {
        self.events.subscribe()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IVec3, &BlockType)> {
        self.blocks.iter()
    }

    pub fn chunk_generated(&self, coord: ChunkCoord) -> bool {
        self.generated.contains(coord)
    }

    /// Membership check and insert in one step; returns false when the
    /// chunk was already generated.
    pub fn mark_generated(&mut self, coord: ChunkCoord) -> bool {
        self.generated.insert(coord)
    }

    pub fn generated_chunks(&self) -> &GeneratedChunkSet {
        &self.generated
    }
}
