//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `craftlab_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use craftlab_core::{EngineConfig, GameEngine, MemoryRecordRepository};

fn main() {
    // Fixed RNG seed and in-memory storage keep every run identical.
    let repo = MemoryRecordRepository::new();
    let mut engine = GameEngine::with_rng_seed(repo, EngineConfig::default(), 7);
    engine.load();

    println!("craftlab_core version={}", craftlab_core::core_version());
    println!(
        "catalog elements={} recipes={}",
        engine.elements().len(),
        engine.combinations().len()
    );

    match engine.combine_elements("water", "fire") {
        Some(result) => println!("water + fire = {} {}", result.icon, result.name),
        None => println!("water + fire = (no effect)"),
    }

    match engine.combine_elements("dragon", "snow") {
        Some(result) => println!("dragon + snow = {} {}", result.icon, result.name),
        None => println!("dragon + snow = (no effect)"),
    }
}
