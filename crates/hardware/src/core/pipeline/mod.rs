//! Instruction pipeline implementation.
//!
//! 1. **Control:** Opcode/funct3/funct7 to [`signals::ControlSignals`] mapping.
//! 2. **Signals:** Control signal types produced during instruction decode.
//! 3. **Latches:** Inter-stage buffers (`Option<Entry>`, bubble = `None`).
//! 4. **Hazards:** Load-use stall detection and forwarding.
//! 5. **Stages:** Fetch, Decode, Execute, Memory, Writeback.

/// Opcode/funct3/funct7 to control-signal decode table.
pub mod control;

/// Data hazard detection and forwarding.
pub mod hazards;

/// Inter-stage pipeline latches.
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// The five pipeline stages.
pub mod stages;
