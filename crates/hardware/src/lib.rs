//! RV32I 5-stage in-order pipeline simulator library.
//!
//! This crate implements a cycle-accurate simulator for the RISC-V RV32I
//! base integer instruction set, organized as a classic five-stage in-order
//! pipeline:
//! 1. **Core:** Fetch, Decode, Execute, Memory, Writeback stages connected by
//!    four inter-stage latches, with load-use stalling and forwarding.
//! 2. **Memory:** A word-addressed instruction memory and a sparse,
//!    byte-addressed data memory.
//! 3. **ISA:** Decoding and execution for the RV32I instruction formats.
//! 4. **Simulation:** `Simulator` (owns the CPU), a binary loader, and
//!    run configuration.

/// Common types shared across the simulator (errors, register file).
pub mod common;
/// Simulator configuration (trace flag, entry PC, cycle budget).
pub mod config;
/// CPU core: state, pipeline stages, latches, hazards, and execution units.
pub mod core;
/// Instruction set: decoding, instruction formats, and RV32I encodings.
pub mod isa;
/// Memory subsystem: instruction memory and data memory.
pub mod memory;
/// Simulation: `Simulator` and the binary loader.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; owns the register file, memories, and pipeline latches.
pub use crate::core::Cpu;
/// Taxonomy of run-terminating simulation faults.
pub use crate::common::SimError;
/// Top-level simulator; owns the CPU and drives it one cycle at a time.
pub use crate::sim::simulator::Simulator;
