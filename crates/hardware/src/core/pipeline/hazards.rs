//! Data hazard detection and forwarding.
//!
//! Two mechanisms keep the single-issue pipeline correct in the presence of
//! back-to-back dependent instructions:
//! 1. **Stall:** a load-use hazard (the instruction in ID/EX is a load whose
//!    destination the instruction currently in IF/ID needs) is not
//!    forwardable in time, so decode is held for one cycle.
//! 2. **Forward:** every other RAW hazard is resolved by bypassing the
//!    register file, reading the producer's result straight out of EX/MEM
//!    or MEM/WB.

use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};

/// True if the instruction in `id_ex` is a load whose destination register
/// is read by the instruction currently in `if_id`, and forwarding from
/// EX/MEM cannot supply the value in time (the classic load-use hazard).
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    let (Some(producer), Some(consumer)) = (id_ex, if_id) else {
        return false;
    };
    if !producer.ctrl.is_load || producer.rd == 0 {
        return false;
    }
    let consumer_rs1 = consumer.inst_rs1();
    let consumer_rs2 = consumer.inst_rs2();
    producer.rd == consumer_rs1 || producer.rd == consumer_rs2
}

/// Forwards register values for `rs1`/`rs2`, preferring the more recent
/// producer: EX/MEM's ALU result beats MEM/WB's writeback value, which beats
/// the value Decode read from the register file.
///
/// EX/MEM entries that are themselves loads cannot forward their result
/// (the loaded value isn't available until Memory completes), so that tier
/// is skipped for loads.
pub fn forward_rs(rs1: usize, rs2: usize, rv1: u32, rv2: u32, ex_mem: &ExMem, mem_wb: &MemWb) -> (u32, u32) {
    let mut a = rv1;
    let mut b = rv2;

    if let Some(mw) = mem_wb {
        if mw.ctrl.reg_write && mw.rd != 0 {
            let value = if mw.ctrl.is_load {
                mw.load_value
            } else if matches!(mw.ctrl.wb_src, crate::core::pipeline::signals::WbSrc::PcPlus4) {
                mw.pc_plus_4
            } else if matches!(mw.ctrl.wb_src, crate::core::pipeline::signals::WbSrc::Imm) {
                mw.imm as u32
            } else {
                mw.alu_result
            };
            if mw.rd == rs1 {
                a = value;
            }
            if mw.rd == rs2 {
                b = value;
            }
        }
    }

    if let Some(em) = ex_mem {
        if em.ctrl.reg_write && em.rd != 0 && !em.ctrl.is_load {
            if em.rd == rs1 {
                a = em.alu_result;
            }
            if em.rd == rs2 {
                b = em.alu_result;
            }
        }
    }

    (a, b)
}

/// Minimal view of an IF/ID entry's register fields, needed only for the
/// load-use check before full decode has run.
trait IfIdRegs {
    fn inst_rs1(&self) -> usize;
    fn inst_rs2(&self) -> usize;
}

impl IfIdRegs for crate::core::pipeline::latches::IfIdEntry {
    fn inst_rs1(&self) -> usize {
        crate::isa::decode::decode(self.inst).rs1
    }
    fn inst_rs2(&self) -> usize {
        crate::isa::decode::decode(self.inst).rs2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
    use crate::core::pipeline::signals::ControlSignals;

    #[test]
    fn load_use_hazard_detected_when_consumer_reads_producer_rd() {
        let id_ex = Some(IdExEntry {
            pc: 0,
            rd: 5,
            rs1: 1,
            rs2: 2,
            rv1: 0,
            rv2: 0,
            imm: 0,
            ctrl: ControlSignals {
                is_load: true,
                ..Default::default()
            },
        });
        // ADD x3, x5, x0 -> rs1=5
        let if_id = Some(IfIdEntry {
            pc: 4,
            inst: 0x00028_1B3,
        });
        assert!(need_stall_load_use(&id_ex, &if_id));
    }

    #[test]
    fn ex_mem_forwarding_beats_stale_register_value() {
        let ex_mem = Some(ExMemEntry {
            pc: 0,
            rd: 5,
            alu_result: 99,
            store_value: 0,
            pc_plus_4: 0,
            imm: 0,
            ctrl: ControlSignals {
                reg_write: true,
                ..Default::default()
            },
        });
        let (a, _) = forward_rs(5, 6, 0, 0, &ex_mem, &None);
        assert_eq!(a, 99);
    }

    #[test]
    fn mem_wb_load_forwards_loaded_value() {
        let mem_wb = Some(MemWbEntry {
            pc: 0,
            rd: 7,
            alu_result: 0,
            load_value: 123,
            pc_plus_4: 0,
            imm: 0,
            ctrl: ControlSignals {
                reg_write: true,
                is_load: true,
                ..Default::default()
            },
        });
        let (a, _) = forward_rs(7, 0, 0, 0, &None, &mem_wb);
        assert_eq!(a, 123);
    }
}
