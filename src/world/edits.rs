use crate::world::block::BlockType;
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// One player-placed block: `{"position": [x, y, z], "blockType": "..."}`
/// in the persisted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedBlock {
    #[serde(with = "ivec3_serde")]
    pub position: IVec3,
    #[serde(rename = "blockType")]
    pub block: BlockType,
}

// Custom serialization for IVec3
mod ivec3_serde {
    use glam::IVec3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(vec: &IVec3, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [vec.x, vec.y, vec.z].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<IVec3, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y, z] = <[i32; 3]>::deserialize(deserializer)?;
        Ok(IVec3::new(x, y, z))
    }
}

/// The player-placed block list. Generation never touches it; edits keep
/// at most one entry per position. Order carries no meaning, only the set
/// of records does.
#[derive(Debug, Default)]
pub struct EditLog {
    placed: Vec<PlacedBlock>,
}

impl EditLog {
    pub fn new() -> Self {
        Self { placed: Vec::new() }
    }

    pub fn from_blocks(blocks: Vec<PlacedBlock>) -> Self {
        Self { placed: blocks }
    }

    /// Records a placement, replacing any prior entry at that position.
    pub fn record_place(&mut self, position: IVec3, block: BlockType) {
        self.placed.retain(|p| p.position != position);
        self.placed.push(PlacedBlock { position, block });
    }

    /// Drops the entry at `position` when the broken block was player
    /// placed. Breaking generated terrain leaves the list untouched.
    pub fn record_break(&mut self, position: IVec3) -> bool {
        let before = self.placed.len();
        self.placed.retain(|p| p.position != position);
        self.placed.len() != before
    }

    pub fn blocks(&self) -> &[PlacedBlock] {
        &self.placed
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}
