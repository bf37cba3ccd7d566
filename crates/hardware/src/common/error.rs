//! Simulation error types.
//!
//! Errors the pipeline can surface while ticking: a decode failure (illegal
//! or unimplemented encoding) or a non-terminating program caught by the
//! cycle-budget watchdog.

use thiserror::Error;

/// Errors that can terminate a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The fetched word did not decode to a supported RV32I instruction.
    #[error("illegal instruction {raw:#010x} at pc {pc:#010x}")]
    DecodeError {
        /// Program counter of the offending fetch.
        pc: u32,
        /// Raw instruction word that failed to decode.
        raw: u32,
    },

    /// A memory access fell outside the addressable data memory region.
    #[error("memory access fault: {access} at address {addr:#010x}")]
    MemoryAccessError {
        /// Faulting byte address.
        addr: u32,
        /// Description of the access that faulted (e.g. "word load").
        access: &'static str,
    },

    /// The program ran past the configured cycle budget without halting.
    #[error("program did not terminate within {cycles} cycles")]
    Nontermination {
        /// Cycle budget that was exhausted.
        cycles: u64,
    },
}
