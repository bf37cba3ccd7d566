//! Execute (EX) stage.
//!
//! Resolves RAW hazards via forwarding, runs the ALU and comparator, and
//! resolves taken branches/jumps. A taken control-flow instruction redirects
//! `cpu.pc` and nulls `cpu.if_id` directly — no separate flush flag; decode
//! and fetch, running later in the same tick, observe the redirected state
//! automatically.

use crate::core::Cpu;
use crate::core::pipeline::hazards::forward_rs;
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::pipeline::signals::{BranchKind, OpASrc, OpBSrc};
use crate::core::units::alu::Alu;
use crate::core::units::cmp::Cmp;

/// Executes the Execute stage.
pub fn execute_stage(cpu: &mut Cpu) {
    let Some(entry) = cpu.id_ex.take() else {
        cpu.ex_mem = None;
        return;
    };
    let ctrl = entry.ctrl;

    let (fwd_rs1, fwd_rs2) = forward_rs(entry.rs1, entry.rs2, entry.rv1, entry.rv2, &cpu.ex_mem, &cpu.mem_wb);

    let op_a = match ctrl.a_src {
        OpASrc::Reg1 => fwd_rs1,
        OpASrc::Pc => entry.pc,
    };
    let op_b = match ctrl.b_src {
        OpBSrc::Reg2 => fwd_rs2,
        OpBSrc::Imm => entry.imm as u32,
    };

    let alu_result = Alu::execute(ctrl.alu_op, op_a, op_b);
    let pc_plus_4 = entry.pc.wrapping_add(4);

    let taken_target = match ctrl.branch_kind {
        BranchKind::None => None,
        BranchKind::Conditional => {
            Cmp::execute(ctrl.cmp_op, fwd_rs1, fwd_rs2).then(|| entry.pc.wrapping_add(entry.imm as u32))
        }
        BranchKind::Unconditional => Some(entry.pc.wrapping_add(entry.imm as u32)),
        BranchKind::Indirect => Some(alu_result & !1u32),
    };

    if let Some(target) = taken_target {
        tracing::debug!(pc = entry.pc, target, "EX taken, flushing IF/ID");
        cpu.pc = target;
        cpu.if_id = None;
        cpu.stats.stalls_control += 1;
    }

    cpu.ex_mem = Some(ExMemEntry {
        pc: entry.pc,
        rd: entry.rd,
        alu_result,
        store_value: fwd_rs2,
        pc_plus_4,
        imm: entry.imm,
        ctrl,
    });
}
