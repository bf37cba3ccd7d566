//! CPU core definition.
//!
//! `Cpu` owns every piece of state the five pipeline stages read and write:
//! the register file, program counter, instruction/data memory, the four
//! inter-stage latches, and the running statistics. [`execution::tick`] is
//! the driver that advances it one cycle.

/// Per-cycle stage dispatch (the `tick` driver).
pub mod execution;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::memory::{DataMemory, InstructionMemory};
use crate::stats::Stats;

/// Architectural and microarchitectural state of the pipeline.
#[derive(Debug)]
pub struct Cpu {
    /// Integer register file.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: u32,
    /// Instruction memory.
    pub imem: InstructionMemory,
    /// Data memory.
    pub dmem: DataMemory,

    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,

    /// True once an EBREAK has completed Writeback.
    pub halted: bool,
    /// Running simulation statistics.
    pub stats: Stats,
}

impl Cpu {
    /// Creates a new CPU with the given instruction memory and configuration.
    ///
    /// Data memory starts empty; the register file starts zeroed.
    pub fn new(imem: InstructionMemory, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: config.entry_pc,
            imem,
            dmem: DataMemory::new(),
            if_id: None,
            id_ex: None,
            ex_mem: None,
            mem_wb: None,
            halted: false,
            stats: Stats::default(),
        }
    }

    /// True once every latch has drained (all bubbles) — used alongside
    /// IMEM exhaustion to detect natural end-of-program.
    pub fn pipeline_drained(&self) -> bool {
        self.if_id.is_none() && self.id_ex.is_none() && self.ex_mem.is_none() && self.mem_wb.is_none()
    }

    /// Dumps the program counter and register file to stderr.
    pub fn dump_state(&self) {
        eprintln!("pc = {:#010x}", self.pc);
        self.regs.dump();
    }
}
