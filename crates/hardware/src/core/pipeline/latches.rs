//! Pipeline latch structures for inter-stage communication.
//!
//! Each latch holds at most one in-flight instruction. A bubble (inserted by
//! a flush or a stall) is modeled as `None` rather than a `valid: bool` flag
//! paired with stale contents — there is no state an empty latch can be
//! mistakenly read as holding.

use crate::core::pipeline::signals::ControlSignals;

/// Entry in the IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Debug)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub inst: u32,
}

/// IF/ID latch: `None` is a bubble.
pub type IfId = Option<IfIdEntry>;

/// Entry in the ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Debug)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Value read from `rs1` at Decode time.
    pub rv1: u32,
    /// Value read from `rs2` at Decode time.
    pub rv2: u32,
    /// Sign-extended immediate.
    pub imm: i32,
    /// Control signals produced by decode.
    pub ctrl: ControlSignals,
}

/// ID/EX latch: `None` is a bubble.
pub type IdEx = Option<IdExEntry>;

/// Entry in the EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Debug)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU (or equivalent) result computed in Execute.
    pub alu_result: u32,
    /// Value to be stored, for stores.
    pub store_value: u32,
    /// `pc + 4`, the JAL/JALR link value.
    pub pc_plus_4: u32,
    /// The raw decoded immediate, for LUI.
    pub imm: i32,
    /// Control signals carried through from decode.
    pub ctrl: ControlSignals,
}

/// EX/MEM latch: `None` is a bubble.
pub type ExMem = Option<ExMemEntry>;

/// Entry in the MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Debug)]
pub struct MemWbEntry {
    /// Program counter of the instruction (for tracing and retirement counting).
    pub pc: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU result, for non-load writebacks.
    pub alu_result: u32,
    /// Value loaded from data memory, for loads.
    pub load_value: u32,
    /// `pc + 4`, the JAL/JALR link value.
    pub pc_plus_4: u32,
    /// The raw decoded immediate, for LUI.
    pub imm: i32,
    /// Control signals carried through from decode.
    pub ctrl: ControlSignals,
}

/// MEM/WB latch: `None` is a bubble.
pub type MemWb = Option<MemWbEntry>;
