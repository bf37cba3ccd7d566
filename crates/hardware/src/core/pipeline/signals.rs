//! Pipeline control signals.
//!
//! The control unit (see [`super::control`]) maps opcode/funct3/funct7 to one
//! of these signal sets during decode. Every later stage reads signals off
//! the latch entry rather than re-inspecting the raw instruction.

/// ALU operation selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition. Also used for AUIPC (pc + imm) and JAL/JALR (pc + 4, rs1 + imm).
    #[default]
    Add,
    /// Integer subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
}

/// Comparator operation selector, used by conditional branches.
///
/// Kept distinct from [`AluOp`]: the comparator always reads `rs1`/`rs2`
/// directly, never the ALU's immediate-capable operand mux.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CmpOp {
    /// Equal.
    #[default]
    Eq,
    /// Not equal.
    Ne,
    /// Less than (signed).
    Lt,
    /// Greater than or equal (signed).
    Ge,
    /// Less than (unsigned).
    Ltu,
    /// Greater than or equal (unsigned).
    Geu,
}

/// Source of the ALU's first operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Register `rs1`.
    #[default]
    Reg1,
    /// Program counter (AUIPC, JAL, JALR's PC+4 writeback component).
    Pc,
}

/// Source of the ALU's second operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Register `rs2`.
    #[default]
    Reg2,
    /// The decoded immediate.
    Imm,
}

/// Source of the value written back to the register file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WbSrc {
    /// ALU result.
    #[default]
    Alu,
    /// Value loaded from data memory.
    Load,
    /// `pc + 4` (JAL/JALR link value).
    PcPlus4,
    /// The raw decoded immediate (LUI).
    Imm,
}

/// Kind of control-flow change an instruction may cause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BranchKind {
    /// No control-flow effect; `pc + 4` is next.
    #[default]
    None,
    /// Conditional branch; taken iff the comparator result is true.
    Conditional,
    /// Unconditional direct jump (JAL): target is `pc + imm`.
    Unconditional,
    /// Unconditional indirect jump (JALR): target is `(rs1 + imm) & !1`.
    Indirect,
}

/// Width of a load or store's memory access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// Not a memory instruction.
    #[default]
    Nop,
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    Word,
}

/// Full set of control signals produced by the decode stage for one instruction.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSignals {
    /// ALU operation to apply in Execute.
    pub alu_op: AluOp,
    /// Comparator operation to apply in Execute (branches only).
    pub cmp_op: CmpOp,
    /// ALU operand A source.
    pub a_src: OpASrc,
    /// ALU operand B source.
    pub b_src: OpBSrc,
    /// Register writeback value source.
    pub wb_src: WbSrc,
    /// Control-flow effect of this instruction.
    pub branch_kind: BranchKind,
    /// Memory access width, if any.
    pub mem_width: MemWidth,
    /// True if this is a load (for unsigned loads, zero-extend in Memory stage).
    pub is_load: bool,
    /// True if this is a store.
    pub is_store: bool,
    /// True if the load must zero- rather than sign-extend (LBU/LHU).
    pub load_unsigned: bool,
    /// True if this instruction writes a destination register.
    pub reg_write: bool,
    /// True if this is EBREAK: the simulator halts upon reaching Writeback.
    pub is_ebreak: bool,
}
