//! Instruction Decode (ID) stage.
//!
//! Parses the IF/ID instruction, reads `rs1`/`rs2` from the register file,
//! applies the control unit, and publishes everything to ID/EX. The
//! register read here returns the committed value; forwarding happens in
//! Execute, not here.
//!
//! A decode miss (unrecognized opcode/funct3/funct7) is fatal: it surfaces
//! as `SimError::DecodeError` rather than being silently turned into a
//! bubble, matching the "illegal instruction" exit condition.

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::control::decode_control;
use crate::core::pipeline::latches::IdExEntry;
use crate::isa::decode::decode as instruction_decode;
use crate::isa::instruction::InstructionBits;

/// Executes the Decode stage.
pub fn decode_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let Some(entry) = cpu.if_id else {
        cpu.id_ex = None;
        return Ok(());
    };

    let decoded = instruction_decode(entry.inst);
    let ctrl = decode_control(
        entry.inst,
        entry.inst.opcode(),
        entry.inst.funct3(),
        entry.inst.funct7(),
    )
    .ok_or(SimError::DecodeError {
        pc: entry.pc,
        raw: entry.inst,
    })?;

    tracing::trace!(pc = entry.pc, inst = entry.inst, "ID");

    cpu.id_ex = Some(IdExEntry {
        pc: entry.pc,
        rd: decoded.rd,
        rs1: decoded.rs1,
        rs2: decoded.rs2,
        rv1: cpu.regs.read(decoded.rs1),
        rv2: cpu.regs.read(decoded.rs2),
        imm: decoded.imm,
        ctrl,
    });
    Ok(())
}
