//! Configuration for the RV32I pipeline simulator.
//!
//! `Config` is the single knob panel passed to `Simulator::new`: the cycle
//! budget enforced by the hang-detection watchdog and the program's entry
//! point. Configuration is supplied via JSON/TOML from an embedder or use
//! `Config::default()` for the CLI. Trace verbosity is a logging concern,
//! controlled by the `tracing_subscriber::EnvFilter` the CLI builds from
//! `--trace`, not by this struct.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Program counter value the pipeline resets to when no entry point is given.
    pub const ENTRY_PC: u32 = 0;

    /// Maximum cycles a simulation may run before `SimError::Nontermination` fires.
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// Root configuration structure for a simulation run.
///
/// # Examples
///
/// ```
/// use rvsim_hardware::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.entry_pc, 0);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Initial program counter.
    #[serde(default)]
    pub entry_pc: u32,

    /// Maximum number of cycles before the simulation is aborted as
    /// non-terminating. `None` disables the watchdog entirely.
    #[serde(default = "Config::default_max_cycles")]
    pub max_cycles: Option<u64>,
}

impl Config {
    /// Returns the default cycle budget.
    fn default_max_cycles() -> Option<u64> {
        Some(defaults::MAX_CYCLES)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry_pc: defaults::ENTRY_PC,
            max_cycles: Self::default_max_cycles(),
        }
    }
}
