use crate::config::worldgen::{BandConfig, WorldGenConfig};
use crate::noise::{fractal_noise, noise2d};
use crate::world::block::BlockType;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Maps every (x, z) column to a deterministic height and vertical block
/// layering: a low-frequency selector picks a band, the band's formula
/// produces the height, and a fixed layering rule assigns block types.
///
/// Deterministic over (config, seed); the height memo is the only state
/// and never changes an answer, only avoids recomputing it.
pub struct ColumnClassifier {
    config: WorldGenConfig,
    height_cache: RwLock<HashMap<(i32, i32), i32>>,
}

impl ColumnClassifier {
    pub fn new(config: WorldGenConfig) -> Self {
        Self {
            config,
            height_cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Low-frequency land/ocean selector signal.
    pub fn selector(&self, x: i32, z: i32) -> f64 {
        fractal_noise(x as f64, z as f64, &self.config.selector, self.config.seed)
    }

    /// First band whose threshold the selector exceeds; the last band is
    /// the fallback.
    pub fn band_for(&self, selector: f64) -> &BandConfig {
        self.config
            .bands
            .iter()
            .find(|band| selector > band.selector_min)
            .or_else(|| self.config.bands.last())
            .expect("config carries at least one band")
    }

    /// Integer surface height of the column, clamped into
    /// [min_height, max_height] and memoized.
    pub fn column_height(&self, x: i32, z: i32) -> i32 {
        let key = (x, z);
        {
            let cache = self.height_cache.read();
            if let Some(h) = cache.get(&key) {
                return *h;
            }
        }

        let selector = self.selector(x, z);
        let band = self.band_for(selector);
        let height = self.compute_height(x, z, selector, band);

        self.height_cache.write().insert(key, height);
        height
    }

    fn compute_height(&self, x: i32, z: i32, selector: f64, band: &BandConfig) -> i32 {
        let xf = x as f64;
        let zf = z as f64;

        let mut height = band.base_height + selector * band.selector_gain;
        if let Some(noise) = &band.noise {
            height += fractal_noise(xf, zf, &noise.profile, self.config.seed) * noise.amplitude;
        }
        if let Some(detail) = &band.detail {
            let seed = self.config.seed.wrapping_add(detail.seed_offset);
            height += noise2d(xf * detail.scale, zf * detail.scale, seed) * detail.amplitude;
        }

        (height.floor() as i32).clamp(self.config.min_height, self.config.max_height)
    }

    fn top_block(&self, height: i32) -> BlockType {
        let c = &self.config;
        if height > c.water_level + c.grass_offset {
            BlockType::Grass
        } else if height >= c.water_level + c.sand_offset {
            BlockType::Sand
        } else {
            BlockType::Dirt
        }
    }

    /// Full layering for the column at (x, z): solid blocks at
    /// y in [0, height) with stone below a dirt band below the top block,
    /// then water at every y in [height, water_level] when the column is
    /// submerged. Total: the height clamp keeps the sequence non-empty.
    pub fn classify_column(&self, x: i32, z: i32) -> Vec<(i32, BlockType)> {
        let height = self.column_height(x, z);
        let c = &self.config;
        let top = height - 1;

        let mut layers = Vec::new();
        for y in 0..height {
            let block = if y == top {
                self.top_block(height)
            } else if y >= top - c.dirt_depth {
                BlockType::Dirt
            } else {
                BlockType::Stone
            };
            layers.push((y, block));
        }

        if height <= c.water_level {
            for y in height..=c.water_level {
                layers.push((y, BlockType::Water));
            }
        }

        layers
    }
}
