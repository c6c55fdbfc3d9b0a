use crate::noise::NoiseProfile;
use serde::{Deserialize, Serialize};

/// Fractal component of a band's height formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalTerm {
    pub profile: NoiseProfile,
    pub amplitude: f64,
}

/// Independent single-octave term added into a band's height formula
/// (ridge detail on land, floor variation under the ocean). The seed
/// offset decorrelates it from the fractal octaves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailTerm {
    pub scale: f64,
    pub seed_offset: i32,
    pub amplitude: f64,
}

/// One selector band. Bands are tried in order; a band is chosen when the
/// selector exceeds `selector_min`, and the last band is the fallback.
/// Height is `base_height + fractal + detail + selector * selector_gain`,
/// floored and clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandConfig {
    pub name: String,
    pub selector_min: f64,
    pub base_height: f64,
    pub noise: Option<FractalTerm>,
    pub detail: Option<DetailTerm>,
    pub selector_gain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGenConfig {
    pub seed: i32,
    pub world_size: i32,
    pub world_height: i32,
    pub chunk_size: i32,
    pub water_level: i32,
    pub min_height: i32,
    pub max_height: i32,
    /// Voxels of dirt beneath the top layer before stone takes over.
    pub dirt_depth: i32,
    /// Top layer is grass when `height > water_level + grass_offset`.
    pub grass_offset: i32,
    /// Otherwise sand when `height >= water_level + sand_offset`, else dirt.
    pub sand_offset: i32,
    pub selector: NoiseProfile,
    pub bands: Vec<BandConfig>,
    pub decorate_trees: bool,
    /// Per-column chance of a tree on a grass top when decoration is on.
    pub tree_chance: f64,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            world_size: 64,
            world_height: 32,
            chunk_size: 16,
            water_level: 9,
            min_height: 1,
            max_height: 28,
            dirt_depth: 2,
            grass_offset: 1,
            sand_offset: -2,
            selector: NoiseProfile::new(2, 0.5, 0.005),
            bands: vec![
                BandConfig {
                    name: "land".into(),
                    selector_min: 0.3,
                    base_height: 12.0,
                    noise: Some(FractalTerm {
                        profile: NoiseProfile::new(3, 0.5, 0.02),
                        amplitude: 12.0,
                    }),
                    detail: Some(DetailTerm {
                        scale: 0.08,
                        seed_offset: 1000,
                        amplitude: 3.0,
                    }),
                    selector_gain: 8.0,
                },
                BandConfig {
                    name: "coastal".into(),
                    selector_min: -0.1,
                    base_height: 8.0,
                    noise: Some(FractalTerm {
                        profile: NoiseProfile::new(2, 0.5, 0.03),
                        amplitude: 4.0,
                    }),
                    detail: None,
                    selector_gain: 5.0,
                },
                BandConfig {
                    name: "ocean".into(),
                    selector_min: f64::NEG_INFINITY,
                    base_height: 4.0,
                    noise: None,
                    detail: Some(DetailTerm {
                        scale: 0.03,
                        seed_offset: 2000,
                        amplitude: 2.0,
                    }),
                    selector_gain: 3.0,
                },
            ],
            decorate_trees: false,
            tree_chance: 0.02,
        }
    }
}

impl WorldGenConfig {
    /// The small two-band island world from the edit-focused variant.
    pub fn islands() -> Self {
        Self {
            seed: 0,
            world_size: 32,
            world_height: 16,
            chunk_size: 16,
            water_level: 3,
            min_height: 1,
            max_height: 12,
            dirt_depth: 1,
            grass_offset: 0,
            sand_offset: -12,
            selector: NoiseProfile::new(2, 0.5, 0.008),
            bands: vec![
                BandConfig {
                    name: "hills".into(),
                    selector_min: 0.2,
                    base_height: 4.0,
                    noise: Some(FractalTerm {
                        profile: NoiseProfile::new(2, 0.5, 0.03),
                        amplitude: 5.0,
                    }),
                    detail: None,
                    selector_gain: 3.0,
                },
                BandConfig {
                    name: "sea".into(),
                    selector_min: f64::NEG_INFINITY,
                    base_height: 2.0,
                    noise: None,
                    detail: Some(DetailTerm {
                        scale: 0.04,
                        seed_offset: 1000,
                        amplitude: 2.0,
                    }),
                    selector_gain: 0.0,
                },
            ],
            decorate_trees: false,
            tree_chance: 0.02,
        }
    }

    /// Chunks per side of the world's chunk grid, covering partial chunks.
    pub fn chunk_grid_size(&self) -> i32 {
        (self.world_size + self.chunk_size - 1) / self.chunk_size
    }
}
