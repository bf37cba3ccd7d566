//! Simulator: owns the CPU and drives it one cycle at a time.

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::memory::InstructionMemory;
use crate::stats::Stats;

/// Top-level simulator: CPU state plus the configured cycle budget.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural and pipeline state.
    pub cpu: Cpu,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a new simulator with the given instruction memory and configuration.
    pub fn new(imem: InstructionMemory, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(imem, config),
            max_cycles: config.max_cycles,
        }
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DecodeError` if the instruction in Decode does not
    /// match any known encoding, or `SimError::Nontermination` if the
    /// configured cycle budget is exceeded.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.cpu.tick(self.max_cycles)
    }

    /// True once the simulation has reached a terminal state.
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// Running simulation statistics.
    pub fn stats(&self) -> &Stats {
        &self.cpu.stats
    }
}
