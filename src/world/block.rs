use bitflags::bitflags;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlockError {
    #[error("Unknown block name: {0}")]
    UnknownBlock(String),
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BlockFlags: u32 {
        const NONE = 0;
        const SOLID = 1 << 0;
        const TRANSPARENT = 1 << 1;
        const LIQUID = 1 << 2;
    }
}

/// The closed set of block kinds this world stores. Air is never a value;
/// an empty coordinate simply has no map entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Grass,
    Dirt,
    Stone,
    Wood,
    Sand,
    Water,
    Leaves,
    Glass,
}

impl BlockType {
    pub const ALL: [BlockType; 8] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Wood,
        BlockType::Sand,
        BlockType::Water,
        BlockType::Leaves,
        BlockType::Glass,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Grass => "grass",
            BlockType::Dirt => "dirt",
            BlockType::Stone => "stone",
            BlockType::Wood => "wood",
            BlockType::Sand => "sand",
            BlockType::Water => "water",
            BlockType::Leaves => "leaves",
            BlockType::Glass => "glass",
        }
    }

    pub fn flags(&self) -> BlockFlags {
        match self {
            BlockType::Water => BlockFlags::LIQUID | BlockFlags::TRANSPARENT,
            BlockType::Glass => BlockFlags::SOLID | BlockFlags::TRANSPARENT,
            BlockType::Leaves => BlockFlags::SOLID | BlockFlags::TRANSPARENT,
            _ => BlockFlags::SOLID,
        }
    }

    pub fn is_solid(&self) -> bool {
        self.flags().contains(BlockFlags::SOLID)
    }

    pub fn is_liquid(&self) -> bool {
        self.flags().contains(BlockFlags::LIQUID)
    }

    pub fn is_transparent(&self) -> bool {
        self.flags().contains(BlockFlags::TRANSPARENT)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static NAME_TO_BLOCK: Lazy<HashMap<&'static str, BlockType>> =
    Lazy::new(|| BlockType::ALL.iter().map(|b| (b.name(), *b)).collect());

impl FromStr for BlockType {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAME_TO_BLOCK
            .get(s)
            .copied()
            .ok_or_else(|| BlockError::UnknownBlock(s.to_string()))
    }
}
