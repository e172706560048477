//! Population census of a random soup.
//!
//! Demonstrates: build a profile → World → step toroidally → read metrics
//! until the soup stops changing or the generation budget runs out.

use gol_bench::reference_profile;
use gol_engine::World;
use gol_grid::Topology;

const MAX_GENERATIONS: u64 = 2_000;
const REPORT_EVERY: u64 = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== gol Soup Census ===\n");

    for seed in [1, 2, 3] {
        let mut world = World::from_config(reference_profile(seed)?)?;
        println!("Seed {seed}: {} alive at generation 0", world.alive_cells());

        let mut total_us = 0;
        loop {
            let m = world.step(Topology::Toroidal);
            total_us += m.total_us;
            if m.generation % REPORT_EVERY == 0 {
                println!(
                    "  gen {:>5}: alive={:>5} births={:>4} deaths={:>4}",
                    m.generation, m.alive, m.births, m.deaths
                );
            }
            if m.is_stable() {
                println!("  settled at generation {}", m.generation);
                break;
            }
            if m.generation >= MAX_GENERATIONS {
                println!("  still active after {MAX_GENERATIONS} generations");
                break;
            }
        }
        println!(
            "  final population {} ({} us stepping)\n",
            world.alive_cells(),
            total_us
        );
    }

    println!("Done.");
    Ok(())
}
