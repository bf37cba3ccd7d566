//! Core processor implementation.
//!
//! The CPU state, the five pipeline stages, and the execution units (ALU,
//! comparator) that those stages drive.

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, comparator).
pub mod units;

pub use self::cpu::Cpu;
