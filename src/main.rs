use anyhow::{ensure, Context, Result};
use directories::ProjectDirs;
use glam::IVec3;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::collections::HashMap;
use std::path::Path;

use sandvox::{
    config::core::EngineConfig,
    engine::VoxelEngine,
    world::block::BlockType,
    world::storage::FileStore,
};

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    info!("Initializing sandbox world...");

    let dirs = ProjectDirs::from("com", "MetroManDevTeam", "Sandvox")
        .context("Could not determine platform directories")?;
    let config_path = dirs.config_dir().join("sandvox.toml");
    let world_dir = dirs.data_dir().join("world");

    let config = EngineConfig::load_or_default(&config_path)?;
    if !config_path.exists() {
        config.save(&config_path)?;
        info!("Wrote default config to {}", config_path.display());
    }

    let mut engine = VoxelEngine::new(config)?;
    engine.attach_store(Box::new(FileStore::new(&world_dir)));
    engine.preload_spawn(|done, total| info!("Loading chunks: {done}/{total}"));

    log_block_census(&engine);
    print_surface_map(&engine);

    let placed = scripted_edits(&mut engine)?;
    drop(engine);

    verify_reload(&config_path, &world_dir, placed)?;
    info!("Done");
    Ok(())
}

fn log_block_census(engine: &VoxelEngine) {
    let mut counts: HashMap<BlockType, usize> = HashMap::new();
    for (_, block) in engine.world().iter() {
        *counts.entry(*block).or_default() += 1;
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    for (block, count) in counts {
        info!("  {block}: {count}");
    }
}

/// Top-down map of the world surface, one character per column.
fn print_surface_map(engine: &VoxelEngine) {
    let size = engine.config.worldgen.world_size;
    for z in 0..size {
        let row: String = (0..size)
            .map(|x| {
                let surface = engine.surface_height(x, z);
                match engine.block_at(IVec3::new(x, surface - 1, z)) {
                    Some(BlockType::Grass) => '#',
                    Some(BlockType::Sand) => '.',
                    Some(BlockType::Dirt) => ':',
                    Some(BlockType::Stone) => '^',
                    _ => '~',
                }
            })
            .collect();
        println!("{row}");
    }
}

/// Builds a small glass pillar at spawn and knocks out its middle block.
fn scripted_edits(engine: &mut VoxelEngine) -> Result<IVec3> {
    let spawn = engine.spawn_point();
    let x = spawn.x as i32;
    let z = spawn.z as i32;
    let surface = engine.surface_height(x, z);

    let base = IVec3::new(x, surface, z);
    for dy in 0..3 {
        let pos = IVec3::new(x, surface + dy, z);
        ensure!(
            engine.place_block(pos, BlockType::Glass),
            "spawn pillar left the world bounds at {pos}"
        );
    }
    engine.break_block(IVec3::new(x, surface + 1, z));

    info!(
        "Recorded {} placed blocks at spawn pillar {base}",
        engine.edits().len()
    );
    Ok(base)
}

/// Reopens the world from disk and checks the pillar came back.
fn verify_reload(config_path: &Path, world_dir: &Path, placed: IVec3) -> Result<()> {
    let config = EngineConfig::load_or_default(config_path)?;
    let mut engine = VoxelEngine::new(config)?;
    engine.attach_store(Box::new(FileStore::new(world_dir)));
    engine.preload_spawn(|_, _| {});

    ensure!(
        engine.block_at(placed) == Some(BlockType::Glass),
        "placed block at {placed} did not survive the reload"
    );
    info!("Reload check passed: {} placed blocks restored", engine.edits().len());
    Ok(())
}
