use crate::config::worldgen::WorldGenConfig;
use crate::terrain::classifier::ColumnClassifier;
use crate::world::block::BlockType;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::voxel_world::VoxelWorld;
use glam::IVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Fills chunks of a [`VoxelWorld`] from the column classifier, one
/// chunk footprint at a time. Each chunk is generated at most once;
/// blocks already present (replayed player edits) are never overwritten.
pub struct TerrainGenerator {
    classifier: ColumnClassifier,
}

impl TerrainGenerator {
    pub fn new(config: WorldGenConfig) -> Self {
        Self {
            classifier: ColumnClassifier::new(config),
        }
    }

    pub fn config(&self) -> &WorldGenConfig {
        self.classifier.config()
    }

    pub fn classifier(&self) -> &ColumnClassifier {
        &self.classifier
    }

    /// Chunks live on a fixed grid covering [0, world_size) on both axes.
    pub fn chunk_in_bounds(&self, coord: ChunkCoord) -> bool {
        let grid = self.config().chunk_grid_size();
        coord.x() >= 0 && coord.x() < grid && coord.z() >= 0 && coord.z() < grid
    }

    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        self.classifier.column_height(x, z)
    }

    /// Generates the chunk at `coord` into `world`. Returns false when the
    /// coordinate is off the grid or the chunk was already generated.
    pub fn generate_chunk(&self, coord: ChunkCoord, world: &mut VoxelWorld) -> bool {
        if !self.chunk_in_bounds(coord) {
            log::trace!("Skipping chunk {coord} outside the world grid");
            return false;
        }
        if !world.mark_generated(coord) {
            return false;
        }

        let config = self.config();
        for (x, z) in coord.columns(config.chunk_size) {
            if x >= config.world_size || z >= config.world_size {
                continue;
            }
            for (y, block) in self.classifier.classify_column(x, z) {
                world.set_if_empty(IVec3::new(x, y, z), block);
            }
        }

        if config.decorate_trees {
            self.decorate_chunk(coord, world);
        }
        true
    }

    fn decorate_chunk(&self, coord: ChunkCoord, world: &mut VoxelWorld) {
        let config = self.config();
        let chunk_seed = (config.seed as u64)
            .wrapping_add((coord.x() as u64).wrapping_mul(341_873_128_712))
            .wrapping_add((coord.z() as u64).wrapping_mul(132_897_987_541));
        let mut rng = ChaCha12Rng::seed_from_u64(chunk_seed);

        let base_x = coord.x() * config.chunk_size;
        let base_z = coord.z() * config.chunk_size;

        // One-column margin keeps every leaf inside the chunk.
        for local_x in 1..config.chunk_size - 1 {
            for local_z in 1..config.chunk_size - 1 {
                if !rng.gen_bool(config.tree_chance) {
                    continue;
                }

                let x = base_x + local_x;
                let z = base_z + local_z;
                if x >= config.world_size || z >= config.world_size {
                    continue;
                }

                let height = self.classifier.column_height(x, z);
                if height + 4 >= world.world_height() {
                    continue;
                }
                if world.get(IVec3::new(x, height - 1, z)) != Some(BlockType::Grass) {
                    continue;
                }

                place_tree(world, x, height, z);
            }
        }
    }
}

/// Three wood blocks topped by a small leaf canopy. `base` is the first
/// air cell above the column surface.
fn place_tree(world: &mut VoxelWorld, x: i32, base: i32, z: i32) {
    for dy in 0..3 {
        world.set_if_empty(IVec3::new(x, base + dy, z), BlockType::Wood);
    }
    for dy in 2..4 {
        for dx in -1..=1 {
            for dz in -1..=1 {
                if dy == 2 && dx == 0 && dz == 0 {
                    continue;
                }
                world.set_if_empty(IVec3::new(x + dx, base + dy, z + dz), BlockType::Leaves);
            }
        }
    }
    world.set_if_empty(IVec3::new(x, base + 4, z), BlockType::Leaves);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn test_world(config: &WorldGenConfig) -> VoxelWorld {
        VoxelWorld::new(config.world_size, config.world_height)
    }

    fn snapshot(world: &VoxelWorld) -> BTreeMap<(i32, i32, i32), BlockType> {
        world
            .iter()
            .map(|(pos, block)| ((pos.x, pos.y, pos.z), *block))
            .collect()
    }

    #[test]
    fn generates_identical_chunks_for_the_same_seed() {
        let config = WorldGenConfig::default();
        let gen_a = TerrainGenerator::new(config.clone());
        let gen_b = TerrainGenerator::new(config.clone());
        let mut world_a = test_world(&config);
        let mut world_b = test_world(&config);

        assert!(gen_a.generate_chunk(ChunkCoord::new(1, 1), &mut world_a));
        assert!(gen_b.generate_chunk(ChunkCoord::new(1, 1), &mut world_b));

        assert!(world_a.block_count() > 0);
        assert_eq!(snapshot(&world_a), snapshot(&world_b));
    }

    #[test]
    fn different_seeds_produce_different_terrain() {
        let mut config = WorldGenConfig::default();
        config.seed = 1;
        let gen_a = TerrainGenerator::new(config.clone());
        config.seed = 2;
        let gen_b = TerrainGenerator::new(config);

        let differing = (0..64)
            .filter(|&x| gen_a.surface_height(x, 32) != gen_b.surface_height(x, 32))
            .count();
        assert!(differing > 0);
    }

    #[test]
    fn regenerating_a_chunk_is_a_noop() {
        let config = WorldGenConfig::default();
        let generator = TerrainGenerator::new(config.clone());
        let mut world = test_world(&config);
        let coord = ChunkCoord::new(0, 0);

        assert!(generator.generate_chunk(coord, &mut world));
        let count = world.block_count();

        // A broken block stays broken through the repeated call.
        let gap = IVec3::new(2, generator.surface_height(2, 2) - 1, 2);
        world.remove(gap);

        assert!(!generator.generate_chunk(coord, &mut world));
        assert_eq!(world.block_count(), count - 1);
        assert_eq!(world.get(gap), None);
    }

    #[test]
    fn rejects_chunks_outside_the_world_grid() {
        let config = WorldGenConfig::default();
        let generator = TerrainGenerator::new(config.clone());
        let mut world = test_world(&config);

        for coord in [
            ChunkCoord::new(4, 0),
            ChunkCoord::new(0, 4),
            ChunkCoord::new(-1, 0),
            ChunkCoord::new(0, -1),
        ] {
            assert!(!generator.generate_chunk(coord, &mut world));
            assert!(!world.chunk_generated(coord));
        }
        assert_eq!(world.block_count(), 0);
    }

    #[test]
    fn edge_chunks_clip_to_world_bounds() {
        let mut config = WorldGenConfig::default();
        config.world_size = 20;
        let generator = TerrainGenerator::new(config.clone());
        let mut world = test_world(&config);

        assert!(generator.generate_chunk(ChunkCoord::new(1, 1), &mut world));
        assert!(world.block_count() > 0);
        for (pos, _) in world.iter() {
            assert!(pos.x >= 16 && pos.x < 20);
            assert!(pos.z >= 16 && pos.z < 20);
        }
    }

    #[test]
    fn trees_sprout_on_grass_and_stay_inside_the_world() {
        let mut config = WorldGenConfig::default();
        config.min_height = 20;
        config.max_height = 20;
        config.decorate_trees = true;
        config.tree_chance = 1.0;

        let generator = TerrainGenerator::new(config.clone());
        let mut world = test_world(&config);
        assert!(generator.generate_chunk(ChunkCoord::new(1, 1), &mut world));

        let wood: Vec<IVec3> = world
            .iter()
            .filter(|(_, b)| **b == BlockType::Wood)
            .map(|(pos, _)| *pos)
            .collect();
        assert!(!wood.is_empty());
        for pos in &wood {
            assert!(world.in_bounds(*pos));
            assert!(pos.y >= 20, "trunk sunk into the terrain at {pos}");
        }

        let mut other = test_world(&config);
        let replay = TerrainGenerator::new(config);
        assert!(replay.generate_chunk(ChunkCoord::new(1, 1), &mut other));
        assert_eq!(snapshot(&world), snapshot(&other));
    }
}
