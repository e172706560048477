//! gol Quickstart — a glider crossing a small torus.
//!
//! Demonstrates:
//!   1. Building a grid and dropping a named pattern into it
//!   2. Validating a WorldConfig and constructing a World
//!   3. Stepping on a toroidal topology and reading metrics
//!   4. Saving the final generation and loading it back
//!
//! Run with:
//!   cargo run --example quickstart

use gol_codec::{load_binary, save_binary};
use gol_engine::{World, WorldConfig};
use gol_grid::{Grid, Topology};

// ─── Parameters ─────────────────────────────────────────────────

const SIZE: u32 = 8;
const GENERATIONS: u64 = 8;

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== gol Quickstart ===\n");

    let mut grid = Grid::square(SIZE)?;
    grid.merge(&gol_zoo::glider(), 0, 0, true);

    let config = WorldConfig::with_initial_state(grid);
    let mut world = World::from_config(config)?;
    println!(
        "World created: {}x{}, {} alive\n",
        world.width(),
        world.height(),
        world.alive_cells()
    );
    println!("Generation 0:\n{}\n", world.state());

    for _ in 0..GENERATIONS {
        let m = world.step(Topology::Toroidal);
        println!(
            "Generation {}: alive={} births={} deaths={} ({} us)",
            m.generation, m.alive, m.births, m.deaths, m.total_us
        );
        println!("{}\n", world.state());
    }

    let path = std::env::temp_dir().join("gol-quickstart.bgol");
    save_binary(&path, world.state())?;
    let restored = load_binary(&path)?;
    std::fs::remove_file(&path)?;
    println!(
        "Saved and reloaded {} ({} bytes of cells): identical = {}",
        path.display(),
        gol_codec::packed_len(restored.total_cells()),
        &restored == world.state()
    );

    println!("Done.");
    Ok(())
}
