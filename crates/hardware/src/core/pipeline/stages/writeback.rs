//! Writeback (WB) stage.
//!
//! Commits the MEM/WB entry's result to the register file and, if the
//! retiring instruction is EBREAK, halts the simulation. A single entry
//! commits per cycle: there is nothing to arbitrate.

use crate::core::Cpu;
use crate::core::pipeline::signals::WbSrc;

/// Executes the Writeback stage.
pub fn wb_stage(cpu: &mut Cpu) {
    let Some(entry) = cpu.mem_wb.take() else {
        return;
    };
    let ctrl = entry.ctrl;

    if ctrl.is_ebreak {
        tracing::debug!(pc = entry.pc, "WB ebreak, halting");
        cpu.halted = true;
        cpu.stats.instructions_retired += 1;
        return;
    }

    if ctrl.reg_write {
        let value = match ctrl.wb_src {
            WbSrc::Alu => entry.alu_result,
            WbSrc::Load => entry.load_value,
            WbSrc::PcPlus4 => entry.pc_plus_4,
            WbSrc::Imm => entry.imm as u32,
        };
        cpu.regs.write(entry.rd, value);
        tracing::trace!(pc = entry.pc, rd = entry.rd, value, "WB");
    }

    cpu.stats.instructions_retired += 1;
}
