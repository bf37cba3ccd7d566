//! RISC-V Instruction Decoder.
//!
//! Decodes a 32-bit RISC-V instruction encoding into a structured `Decoded`
//! value: opcode, format, register fields, function codes, and the
//! format-appropriate sign-extended 32-bit immediate.

use crate::isa::instruction::{Decoded, Format, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// The immediate occupies the upper 12 bits and is sign-extended.
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for extracting S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;
/// Bit mask for S-Type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;
/// Bit shift for extracting S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;
/// Bit mask for S-Type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;
/// Bit shift for combining S-Type immediate fields after extraction.
const S_IMM_COMBINED_SHIFT: u32 = 5;
/// Total number of bits in S-Type immediate (12 bits).
const S_IMM_BITS: u32 = 12;

/// Bit shift for extracting B-Type immediate bit 11 (bit 7 of instruction).
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
const B_IMM_11_SHIFT: u32 = 7;
/// Bit mask for B-Type immediate bit 11.
const B_IMM_11_MASK: u32 = 1;
/// Bit shift for extracting B-Type immediate bits 4-1 (bits 8-11 of instruction).
const B_IMM_4_1_SHIFT: u32 = 8;
/// Bit mask for B-Type immediate bits 4-1 (4 bits).
const B_IMM_4_1_MASK: u32 = 0xF;
/// Bit shift for extracting B-Type immediate bits 10-5 (bits 25-30 of instruction).
const B_IMM_10_5_SHIFT: u32 = 25;
/// Bit mask for B-Type immediate bits 10-5 (6 bits).
const B_IMM_10_5_MASK: u32 = 0x3F;
/// Bit shift for extracting B-Type immediate bit 12 (bit 31 of instruction).
const B_IMM_12_SHIFT: u32 = 31;
/// Bit mask for B-Type immediate bit 12 (sign bit).
const B_IMM_12_MASK: u32 = 1;
/// Total number of bits in B-Type immediate (13 bits, sign-extended, bit 0 implicit zero).
const B_IMM_BITS: u32 = 13;
/// Bit position of bit 12 in the reconstructed B-Type immediate.
const B_IMM_12_POS: u32 = 12;
/// Bit position of bit 11 in the reconstructed B-Type immediate.
const B_IMM_11_POS: u32 = 11;
/// Bit position of bits 10-5 in the reconstructed B-Type immediate.
const B_IMM_10_5_POS: u32 = 5;
/// Bit position of bits 4-1 in the reconstructed B-Type immediate.
const B_IMM_4_1_POS: u32 = 1;

/// Bit mask for extracting U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`. Already MSB-aligned; no sign extension needed.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Bit shift for extracting J-Type immediate bits 19-12 (bits 12-19 of instruction).
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const J_IMM_19_12_SHIFT: u32 = 12;
/// Bit mask for J-Type immediate bits 19-12 (8 bits).
const J_IMM_19_12_MASK: u32 = 0xFF;
/// Bit shift for extracting J-Type immediate bit 11 (bit 20 of instruction).
const J_IMM_11_SHIFT: u32 = 20;
/// Bit mask for J-Type immediate bit 11.
const J_IMM_11_MASK: u32 = 1;
/// Bit shift for extracting J-Type immediate bits 10-1 (bits 21-30 of instruction).
const J_IMM_10_1_SHIFT: u32 = 21;
/// Bit mask for J-Type immediate bits 10-1 (10 bits).
const J_IMM_10_1_MASK: u32 = 0x3FF;
/// Bit shift for extracting J-Type immediate bit 20 (bit 31 of instruction).
const J_IMM_20_SHIFT: u32 = 31;
/// Bit mask for J-Type immediate bit 20 (sign bit).
const J_IMM_20_MASK: u32 = 1;
/// Total number of bits in J-Type immediate (21 bits, sign-extended, bit 0 implicit zero).
const J_IMM_BITS: u32 = 21;
/// Bit position of bit 20 in the reconstructed J-Type immediate.
const J_IMM_20_POS: u32 = 20;
/// Bit position of bits 19-12 in the reconstructed J-Type immediate.
const J_IMM_19_12_POS: u32 = 12;
/// Bit position of bit 11 in the reconstructed J-Type immediate.
const J_IMM_11_POS: u32 = 11;
/// Bit position of bits 10-1 in the reconstructed J-Type immediate.
const J_IMM_10_1_POS: u32 = 1;

/// Decodes a RISC-V instruction into its component fields.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let (format, imm) = match opcode {
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => {
            (Format::I, decode_i_type_imm(inst))
        }
        opcodes::OP_STORE => (Format::S, decode_s_type_imm(inst)),
        opcodes::OP_BRANCH => (Format::B, decode_b_type_imm(inst)),
        opcodes::OP_LUI | opcodes::OP_AUIPC => (Format::U, decode_u_type_imm(inst)),
        opcodes::OP_JAL => (Format::J, decode_j_type_imm(inst)),
        opcodes::OP_REG | opcodes::OP_SYSTEM => (Format::R, 0),
        _ => (Format::Unknown, 0),
    };

    Decoded {
        raw: inst,
        opcode,
        format,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm,
    }
}

/// Decodes the immediate value for I-Type instructions.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value for S-Type instructions.
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    let combined = (high << S_IMM_COMBINED_SHIFT) | low;
    sign_extend(combined, S_IMM_BITS)
}

/// Decodes the immediate value for B-Type instructions.
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// The immediate represents a signed byte offset (bit 0 is implicitly zero).
fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & B_IMM_11_MASK;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & B_IMM_12_MASK;

    let combined = (bit_12 << B_IMM_12_POS)
        | (bit_11 << B_IMM_11_POS)
        | (bits_10_5 << B_IMM_10_5_POS)
        | (bits_4_1 << B_IMM_4_1_POS);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the immediate value for U-Type instructions.
///
/// U-Type format: `imm[31:12] | rd | opcode`
fn decode_u_type_imm(inst: u32) -> i32 {
    (inst & U_IMM_MASK) as i32
}

/// Decodes the immediate value for J-Type instructions.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// The immediate represents a signed byte offset (bit 0 is implicitly zero).
fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & J_IMM_11_MASK;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & J_IMM_20_MASK;

    let combined = (bit_20 << J_IMM_20_POS)
        | (bits_19_12 << J_IMM_19_12_POS)
        | (bit_11 << J_IMM_11_POS)
        | (bits_10_1 << J_IMM_10_1_POS);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val as i32) << shift) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addi_sign_extends_negative_immediate() {
        // ADDI x1, x0, -3
        let inst = 0xFFD0_0093;
        let d = decode(inst);
        assert_eq!(d.opcode, opcodes::OP_IMM);
        assert_eq!(d.rd, 1);
        assert_eq!(d.rs1, 0);
        assert_eq!(d.imm, -3);
    }

    #[test]
    fn branch_immediate_is_even_byte_offset() {
        // BEQ x1, x2, +8
        let inst = 0x0020_8463;
        let d = decode(inst);
        assert_eq!(d.opcode, opcodes::OP_BRANCH);
        assert_eq!(d.imm, 8);
    }

    #[test]
    fn lui_immediate_is_msb_aligned_without_shift() {
        // LUI x1, 0x12345
        let inst = 0x1234_50B7;
        let d = decode(inst);
        assert_eq!(d.opcode, opcodes::OP_LUI);
        assert_eq!(d.imm, 0x1234_5000_u32 as i32);
    }

    #[test]
    fn jal_immediate_reconstructs_scattered_bits() {
        // JAL x1, +8
        let inst = 0x008000EF;
        let d = decode(inst);
        assert_eq!(d.opcode, opcodes::OP_JAL);
        assert_eq!(d.imm, 8);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Reference sign-extension formula: shift the value's `bits`-width
    /// field up against the 32-bit boundary, then arithmetic-shift back
    /// down, independent of `sign_extend`'s own shift-based implementation.
    fn reference_sign_extend(val: u32, bits: u32) -> i32 {
        let mask = (1u64 << bits) - 1;
        let masked = u64::from(val) & mask;
        if masked & (1 << (bits - 1)) != 0 {
            (masked as i64 - (1i64 << bits)) as i32
        } else {
            masked as i32
        }
    }

    proptest! {
        #[test]
        fn sign_extend_matches_reference_formula(val in 0u32..(1 << 13), bits in 1u32..=21) {
            let val = val & ((1u32 << bits) - 1);
            prop_assert_eq!(sign_extend(val, bits), reference_sign_extend(val, bits));
        }

        /// ADDI's I-type immediate round-trips bit-exactly through encode/decode
        /// for every representable 12-bit signed value.
        #[test]
        fn i_type_immediate_round_trips(imm in -2048i32..2048, rs1 in 0u32..32, rd in 0u32..32) {
            let inst = (((imm as u32) & 0xFFF) << 20) | (rs1 << 15) | (rd << 7) | opcodes::OP_IMM;
            let decoded = decode(inst);
            prop_assert_eq!(decoded.imm, imm);
            prop_assert_eq!(decoded.rs1, rs1 as usize);
            prop_assert_eq!(decoded.rd, rd as usize);
        }
    }
}
