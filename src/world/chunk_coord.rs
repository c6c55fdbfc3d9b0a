use glam::{IVec2, Vec3};
use std::fmt;

/// Coordinate on the chunk grid. Chunks tile the (x, z) plane at a fixed
/// granularity; a chunk is generated column by column as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord(pub IVec2);

impl ChunkCoord {
    pub fn new(x: i32, z: i32) -> Self {
        Self(IVec2::new(x, z))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn z(&self) -> i32 {
        self.0.y
    }

    /// Chunk containing a world-space position.
    pub fn from_world_pos(pos: Vec3, chunk_size: i32) -> Self {
        Self::from_column(pos.x.floor() as i32, pos.z.floor() as i32, chunk_size)
    }

    /// Chunk containing the voxel column at (x, z).
    pub fn from_column(x: i32, z: i32, chunk_size: i32) -> Self {
        Self(IVec2::new(x.div_euclid(chunk_size), z.div_euclid(chunk_size)))
    }

    /// World-space (x, z) of every column inside this chunk.
    pub fn columns(&self, chunk_size: i32) -> impl Iterator<Item = (i32, i32)> {
        let base_x = self.0.x * chunk_size;
        let base_z = self.0.y * chunk_size;
        (0..chunk_size)
            .flat_map(move |dx| (0..chunk_size).map(move |dz| (base_x + dx, base_z + dz)))
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from((x, z): (i32, i32)) -> Self {
        Self(IVec2::new(x, z))
    }
}
