//! # Buffer Comparison Demo
//!
//! Pushes the same sequential workload through both buffer strategies and
//! reports which one was faster at each capacity.
//!
//! Run with: `cargo run --release --example compare`
//! Add `-- large` for the ten-million-item workload.

use anyhow::Context;

use fifo_buffers::compare;
use fifo_buffers::{Config, Strategy};

fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    fifo_buffers::init_logging();

    let config = match std::env::args().nth(1).as_deref() {
        Some("large") => Config::large_workload(),
        Some("small") | None => Config::small_workload(),
        Some(other) => anyhow::bail!("unknown preset '{}' (expected 'small' or 'large')", other),
    };

    println!("Comparing array and chain buffers");
    println!("   Capacities: {:?}", config.capacities);
    println!("   Workload:   {} items", config.workload_size);
    println!();

    let results = compare::run(&config).context("comparison run failed")?;

    for comparison in &results {
        println!("   {}", comparison);
        for strategy in Strategy::ALL {
            println!("      {:<5} {:?}", strategy, comparison.elapsed(strategy));
        }
    }

    Ok(())
}
