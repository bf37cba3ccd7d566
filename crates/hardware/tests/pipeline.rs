//! End-to-end pipeline scenarios.
//!
//! Each case assembles a short RV32I program directly (no assembler), runs
//! it on a `Simulator` to halt (EBREAK), and asserts the final architectural
//! state. These exercise forwarding, load-use stalling, and branch/jump
//! flushing together rather than in isolation.

use pretty_assertions::assert_eq;
use rstest::rstest;

use rvsim_hardware::config::Config;
use rvsim_hardware::memory::InstructionMemory;
use rvsim_hardware::sim::simulator::Simulator;

const OP_LOAD: u32 = 0b0000011;
const OP_IMM: u32 = 0b0010011;
const OP_STORE: u32 = 0b0100011;
const OP_REG: u32 = 0b0110011;
const OP_LUI: u32 = 0b0110111;
const OP_BRANCH: u32 = 0b1100011;
const OP_JAL: u32 = 0b1101111;
const OP_SYSTEM: u32 = 0b1110011;

const EBREAK: u32 = (0b000 << 12) | OP_SYSTEM | (0x1 << 20);

fn r_type(funct7: u32, rs2: u32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    (funct7 << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
}

fn i_type(imm: i32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    (((imm as u32) & 0xFFF) << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
}

fn s_type(imm: i32, rs2: u32, rs1: u32, funct3: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    let imm_hi = (imm >> 5) & 0x7F;
    let imm_lo = imm & 0x1F;
    (imm_hi << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (imm_lo << 7) | opcode
}

fn b_type(imm: i32, rs2: u32, rs1: u32, funct3: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    let b12 = (imm >> 12) & 0x1;
    let b11 = (imm >> 11) & 0x1;
    let b10_5 = (imm >> 5) & 0x3F;
    let b4_1 = (imm >> 1) & 0xF;
    (b12 << 31) | (b10_5 << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (b4_1 << 8) | (b11 << 7) | opcode
}

fn u_type(imm: i32, rd: u32, opcode: u32) -> u32 {
    ((imm as u32) & 0xFFFF_F000) | (rd << 7) | opcode
}

fn j_type(imm: i32, rd: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    let b20 = (imm >> 20) & 0x1;
    let b19_12 = (imm >> 12) & 0xFF;
    let b11 = (imm >> 11) & 0x1;
    let b10_1 = (imm >> 1) & 0x3FF;
    (b20 << 31) | (b10_1 << 21) | (b11 << 20) | (b19_12 << 12) | (rd << 7) | opcode
}

fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0b000, rd, OP_IMM)
}

fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0, rs2, rs1, 0b000, rd, OP_REG)
}

fn sw(rs2: u32, offset: i32, rs1: u32) -> u32 {
    s_type(offset, rs2, rs1, 0b010, OP_STORE)
}

fn lw(rd: u32, offset: i32, rs1: u32) -> u32 {
    i_type(offset, rs1, 0b010, rd, OP_LOAD)
}

fn beq(rs1: u32, rs2: u32, offset: i32) -> u32 {
    b_type(offset, rs2, rs1, 0b000, OP_BRANCH)
}

fn jal(rd: u32, offset: i32) -> u32 {
    j_type(offset, rd, OP_JAL)
}

fn lui(rd: u32, imm: i32) -> u32 {
    u_type(imm, rd, OP_LUI)
}

fn run_to_halt(words: Vec<u32>) -> Simulator {
    let imem = InstructionMemory::new(words);
    let config = Config::default();
    let mut sim = Simulator::new(imem, &config);

    while !sim.is_halted() {
        sim.tick().expect("program decodes and terminates");
        assert_eq!(sim.cpu.regs.read(0), 0, "x0 must stay zero");
        assert_eq!(sim.cpu.pc % 4, 0, "pc must stay word-aligned");
    }
    sim
}

#[rstest]
fn straight_line_arithmetic() {
    let sim = run_to_halt(vec![
        addi(1, 0, 5),
        addi(2, 0, 7),
        add(3, 1, 2),
        EBREAK,
    ]);
    assert_eq!(sim.cpu.regs.read(1), 5);
    assert_eq!(sim.cpu.regs.read(2), 7);
    assert_eq!(sim.cpu.regs.read(3), 12);
    assert!(sim.stats().cycles >= 5);
}

#[rstest]
fn back_to_back_ex_mem_forwarding() {
    let sim = run_to_halt(vec![
        addi(1, 0, 10),
        addi(1, 1, -3),
        addi(1, 1, -3),
        EBREAK,
    ]);
    assert_eq!(sim.cpu.regs.read(1), 4);
}

#[rstest]
fn store_then_load_stalls_on_use() {
    let sim = run_to_halt(vec![
        addi(2, 0, 20),
        sw(2, 0, 0),
        lw(3, 0, 0),
        EBREAK,
    ]);
    assert_eq!(sim.cpu.dmem.read_u32(0), 0x14);
    assert_eq!(sim.cpu.regs.read(3), 20);
    assert!(sim.stats().stalls_data >= 1);
}

#[rstest]
fn taken_branch_flushes_the_skipped_instruction() {
    let sim = run_to_halt(vec![
        addi(1, 0, 3),
        addi(2, 0, 3),
        beq(1, 2, 8),
        addi(4, 0, 99),
        addi(5, 0, 42),
        EBREAK,
    ]);
    assert_eq!(sim.cpu.regs.read(4), 0);
    assert_eq!(sim.cpu.regs.read(5), 42);
    assert!(sim.stats().stalls_control >= 1);
}

#[rstest]
fn jal_sets_link_register_and_skips_one_instruction() {
    let sim = run_to_halt(vec![
        jal(1, 8),
        addi(2, 0, 99),
        addi(3, 0, 7),
        EBREAK,
    ]);
    assert_eq!(sim.cpu.regs.read(1), 4);
    assert_eq!(sim.cpu.regs.read(2), 0);
    assert_eq!(sim.cpu.regs.read(3), 7);
}

#[rstest]
#[case(0x12345, 0x678)]
#[case(0x12346, -0x123)]
fn lui_addi_reconstructs_a_32_bit_constant(#[case] upper: i32, #[case] lower: i32) {
    let sim = run_to_halt(vec![lui(1, upper << 12), addi(1, 1, lower), EBREAK]);
    let expected = ((upper << 12) as u32).wrapping_add(lower as u32);
    assert_eq!(sim.cpu.regs.read(1), expected);
}
