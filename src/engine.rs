use crate::config::core::EngineConfig;
use crate::terrain::{ChunkLoader, TerrainGenerator};
use crate::world::block::BlockType;
use crate::world::edits::EditLog;
use crate::world::events::BlockEvent;
use crate::world::storage::{load_placed_blocks, save_placed_blocks, KeyValueStore};
use crate::world::voxel_world::VoxelWorld;
use anyhow::Result;
use crossbeam_channel::Receiver;
use glam::{IVec3, Vec3};
use std::sync::Arc;

/// Ties the world store, terrain generation, chunk loading, and player
/// edit persistence together behind one facade.
pub struct VoxelEngine {
    pub config: EngineConfig,
    world: VoxelWorld,
    generator: Arc<TerrainGenerator>,
    loader: ChunkLoader,
    edits: EditLog,
    store: Option<Box<dyn KeyValueStore>>,
}

impl VoxelEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let world = VoxelWorld::new(config.worldgen.world_size, config.worldgen.world_height);
        let generator = Arc::new(TerrainGenerator::new(config.worldgen.clone()));
        let loader = ChunkLoader::new(generator.clone(), &config.chunks);

        Ok(Self {
            config,
            world,
            generator,
            loader,
            edits: EditLog::default(),
            store: None,
        })
    }

    /// Attaches persistent storage and replays its placed blocks into the
    /// world. Intended at startup: the stored list replaces the in-memory
    /// edit log, and replayed blocks take priority over later generation.
    pub fn attach_store(&mut self, store: Box<dyn KeyValueStore>) {
        let edits = load_placed_blocks(store.as_ref());
        for placed in edits.blocks() {
            self.world.set(placed.position, placed.block);
        }
        self.edits = edits;
        self.store = Some(store);
    }

    /// Center of the world, two blocks above the terrain surface.
    pub fn spawn_point(&self) -> Vec3 {
        let mid = self.config.worldgen.world_size / 2;
        let surface = self.generator.surface_height(mid, mid);
        Vec3::new(mid as f32, (surface + 2) as f32, mid as f32)
    }

    /// Generates every chunk around the spawn point, reporting progress
    /// through `progress(done, total)`.
    pub fn preload_spawn<F>(&mut self, progress: F) -> usize
    where
        F: FnMut(usize, usize),
    {
        let spawn = self.spawn_point();
        let fresh = self.loader.preload(spawn, &mut self.world, progress);
        log::info!("World ready");
        fresh
    }

    /// Tops up chunks around the viewer as it moves.
    pub fn update_loaded(&mut self, viewer: Vec3) -> usize {
        self.loader.ensure_loaded(viewer, &mut self.world)
    }

    /// Places a player block, records it, and persists. Returns false when
    /// the position is out of bounds.
    pub fn place_block(&mut self, pos: IVec3, block: BlockType) -> bool {
        if !self.world.set(pos, block) {
            return false;
        }
        self.edits.record_place(pos, block);
        self.persist_edits();
        true
    }

    /// Breaks the block at `pos`, dropping it from the placed list when
    /// the player put it there. Returns the removed block.
    pub fn break_block(&mut self, pos: IVec3) -> Option<BlockType> {
        let removed = self.world.remove(pos)?;
        if self.edits.record_break(pos) {
            self.persist_edits();
        }
        Some(removed)
    }

    // A failed save never interrupts play; the world state stays valid
    // and the next edit retries.
    fn persist_edits(&mut self) {
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = save_placed_blocks(store.as_mut(), &self.edits) {
                log::error!("Failed to persist placed blocks: {e}");
            }
        }
    }

    pub fn subscribe_events(&mut self) -> Receiver<BlockEvent> {
        self.world.subscribe()
    }

    pub fn block_at(&self, pos: IVec3) -> Option<BlockType> {
        self.world.get(pos)
    }

    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        self.generator.surface_height(x, z)
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub fn edits(&self) -> &EditLog {
        &self.edits
    }
}
