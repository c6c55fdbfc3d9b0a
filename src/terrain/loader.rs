use crate::config::chunksys::ChunkSysConfig;
use crate::terrain::generator::TerrainGenerator;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::voxel_world::VoxelWorld;
use glam::Vec3;
use std::sync::Arc;

/// Drives chunk generation around a moving viewer and around the spawn
/// point at startup. The world's generated-chunk set is the source of
/// truth for what is loaded; the loader itself holds no chunk state.
pub struct ChunkLoader {
    generator: Arc<TerrainGenerator>,
    load_radius: i32,
    preload_radius: i32,
    preload_batch: usize,
}

impl ChunkLoader {
    pub fn new(generator: Arc<TerrainGenerator>, config: &ChunkSysConfig) -> Self {
        Self {
            generator,
            load_radius: config.load_radius,
            preload_radius: config.preload_radius,
            preload_batch: config.preload_batch.max(1),
        }
    }

    pub fn generator(&self) -> &Arc<TerrainGenerator> {
        &self.generator
    }

    /// Square of chunk coordinates within `radius` of the chunk holding
    /// `pos`, clipped to the world grid.
    fn chunks_around(&self, pos: Vec3, radius: i32) -> Vec<ChunkCoord> {
        let center = ChunkCoord::from_world_pos(pos, self.generator.config().chunk_size);
        let mut coords = Vec::new();
        for dx in -radius..=radius {
            for dz in -radius..=radius {
                let coord = ChunkCoord::new(center.x() + dx, center.z() + dz);
                if self.generator.chunk_in_bounds(coord) {
                    coords.push(coord);
                }
            }
        }
        coords
    }

    /// Generates any missing chunks within `load_radius` of the viewer.
    /// Returns how many chunks were generated by this call.
    pub fn ensure_loaded(&self, viewer: Vec3, world: &mut VoxelWorld) -> usize {
        self.chunks_around(viewer, self.load_radius)
            .into_iter()
            .filter(|&coord| self.generator.generate_chunk(coord, world))
            .count()
    }

    /// Generates every chunk within `preload_radius` of the spawn point,
    /// invoking `progress(done, total)` after each batch of
    /// `preload_batch` chunks and once more on completion. Returns how
    /// many chunks were freshly generated.
    pub fn preload<F>(&self, spawn: Vec3, world: &mut VoxelWorld, mut progress: F) -> usize
    where
        F: FnMut(usize, usize),
    {
        let coords = self.chunks_around(spawn, self.preload_radius);
        let total = coords.len();
        log::info!("Preloading {total} chunks around spawn");

        let mut fresh = 0;
        let mut reported = 0;
        for (i, coord) in coords.into_iter().enumerate() {
            if self.generator.generate_chunk(coord, world) {
                fresh += 1;
            }
            let done = i + 1;
            if done % self.preload_batch == 0 {
                progress(done, total);
                reported = done;
            }
        }
        if reported != total {
            progress(total, total);
        }

        log::info!(
            "Preload complete: {fresh} chunks generated, {} blocks",
            world.block_count()
        );
        fresh
    }
}
