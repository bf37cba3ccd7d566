//! System instruction encodings.
//!
//! `funct3 == PRIV` is shared by every `OP_SYSTEM` instruction (ECALL,
//! EBREAK, and the privileged/CSR ops this core doesn't implement) — they
//! differ only in bits normally read as rs2/funct7. Distinguishing them
//! requires matching the full encoded word, not just opcode/funct3/funct7.

/// Full-word encoding of EBREAK, the only `OP_SYSTEM` instruction this core
/// decodes. Anything else under `OP_SYSTEM`, including ECALL
/// (`0x0000_0073`), is out of scope and decode-misses.
pub const EBREAK: u32 = 0x0010_0073;
