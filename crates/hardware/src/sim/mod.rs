//! Simulation utilities and program loading.
//!
//! Provides a binary loader that turns a raw file on disk into an
//! `InstructionMemory`, and the top-level `Simulator` that owns the CPU.

/// Binary loader (little-endian word decoding).
pub mod loader;

/// Top-level simulator wrapping a `Cpu`.
pub mod simulator;
