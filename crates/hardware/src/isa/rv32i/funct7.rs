//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes ADD from SUB and SRL from SRA;
//! for every other RV32I opcode it is don't-care and decoded as `DEFAULT`.

/// Default/don't-care funct7 (ADD, SRL, and all non-shift ALU ops).
pub const DEFAULT: u32 = 0b0000000;
/// SUB / SRA funct7.
pub const ALT: u32 = 0b0100000;
