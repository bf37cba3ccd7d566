//! RV32I pipeline simulator CLI.
//!
//! A single entry point: load a program image, build a `Simulator`, and
//! loop `tick` until the pipeline halts or faults.

use std::process;

use clap::Parser;

use rvsim_hardware::config::Config;
use rvsim_hardware::sim::loader;
use rvsim_hardware::sim::simulator::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "rvsim",
    author,
    version,
    about = "Cycle-accurate RV32I five-stage pipeline simulator",
    long_about = "Loads a flat binary of little-endian RV32I instruction words and runs it to \
completion on a cycle-accurate five-stage in-order pipeline.\n\nExample:\n  rvsim program.bin --trace"
)]
struct Cli {
    /// Path to a flat binary of little-endian 32-bit instruction words.
    program: String,

    /// Maximum cycles before the run is aborted as non-terminating.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Enable per-stage tracing to stderr.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.trace { "trace" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let imem = loader::load_file(&cli.program).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: could not load '{}': {}", cli.program, e);
        process::exit(1);
    });

    let mut config = Config::default();
    if cli.max_cycles.is_some() {
        config.max_cycles = cli.max_cycles;
    }

    let mut sim = Simulator::new(imem, &config);

    loop {
        if let Err(e) = sim.tick() {
            eprintln!("\n[!] FATAL: {}", e);
            sim.cpu.dump_state();
            sim.stats().print();
            process::exit(1);
        }
        if sim.is_halted() {
            println!("\n[*] Halted after {} cycles", sim.stats().cycles);
            sim.cpu.dump_state();
            sim.stats().print();
            process::exit(0);
        }
    }
}
