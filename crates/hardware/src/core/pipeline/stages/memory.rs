//! Memory Access (MEM) stage.
//!
//! Performs the load or store the EX/MEM entry's control signals request and
//! publishes the result (or the ALU passthrough, for non-memory
//! instructions) to MEM/WB.

use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;
use crate::core::pipeline::signals::MemWidth;

/// Executes the Memory stage.
pub fn mem_stage(cpu: &mut Cpu) {
    let Some(entry) = cpu.ex_mem.take() else {
        cpu.mem_wb = None;
        return;
    };
    let ctrl = entry.ctrl;
    let addr = entry.alu_result;

    let load_value = if ctrl.is_load {
        let raw = match ctrl.mem_width {
            MemWidth::Byte => cpu.dmem.read_u8(addr) as u32,
            MemWidth::Half => cpu.dmem.read_u16(addr) as u32,
            MemWidth::Word => cpu.dmem.read_u32(addr),
            MemWidth::Nop => 0,
        };
        if ctrl.load_unsigned {
            raw
        } else {
            sign_extend_load(raw, ctrl.mem_width)
        }
    } else {
        0
    };

    if ctrl.is_store {
        match ctrl.mem_width {
            MemWidth::Byte => cpu.dmem.write_u8(addr, entry.store_value as u8),
            MemWidth::Half => cpu.dmem.write_u16(addr, entry.store_value as u16),
            MemWidth::Word => cpu.dmem.write_u32(addr, entry.store_value),
            MemWidth::Nop => {}
        }
    }

    if ctrl.is_load || ctrl.is_store {
        tracing::trace!(pc = entry.pc, addr, "MEM");
    }

    cpu.mem_wb = Some(MemWbEntry {
        pc: entry.pc,
        rd: entry.rd,
        alu_result: entry.alu_result,
        load_value,
        pc_plus_4: entry.pc_plus_4,
        imm: entry.imm,
        ctrl,
    });
}

/// Sign-extends a sub-word load value from its natural width to 32 bits.
fn sign_extend_load(raw: u32, width: MemWidth) -> u32 {
    match width {
        MemWidth::Byte => (raw as u8 as i8) as i32 as u32,
        MemWidth::Half => (raw as u16 as i16) as i32 as u32,
        MemWidth::Word | MemWidth::Nop => raw,
    }
}
