//! Instruction Fetch (IF) stage.
//!
//! Reads `IMEM[pc]` and publishes `(pc, inst)` to the IF/ID latch, then
//! advances `pc` by 4. Only called by `tick` when neither a stall nor a
//! flush held fetch back this cycle; a flush has already redirected `pc`
//! by the time this runs, so a normal fetch from the new target happens
//! here with no special-casing.
//!
//! Fetching past the end of instruction memory publishes no entry (a
//! bubble) rather than erroring — end-of-program is a normal halt
//! condition, not a fault.

use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;

/// Executes the Fetch stage.
pub fn fetch_stage(cpu: &mut Cpu) {
    let pc = cpu.pc;
    match cpu.imem.fetch(pc) {
        Some(inst) => {
            tracing::trace!(pc, inst, "IF");
            cpu.if_id = Some(IfIdEntry { pc, inst });
            cpu.pc = pc.wrapping_add(4);
        }
        None => {
            cpu.if_id = None;
        }
    }
}
