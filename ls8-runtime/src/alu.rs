//! Arithmetic-logic unit
//!
//! Register-to-register operations. Results wrap to the 8-bit cell width and
//! only `CMP` touches the condition flags.

use ls8_spec::{Flags, Opcode, Register};
use serde::{Deserialize, Serialize};
use crate::error::{Result, RuntimeError};
use crate::state::VMState;

/// ALU operation, numbered by the low nibble of the ALU opcode byte
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AluOp {
    Add = 0x0,
    Sub = 0x1,
    Mul = 0x2,
    Div = 0x3,
    Mod = 0x4,
    Inc = 0x5,
    Dec = 0x6,
    Cmp = 0x7,
    And = 0x8,
    Not = 0x9,
    Or = 0xA,
    Xor = 0xB,
    Shl = 0xC,
    Shr = 0xD,
}

impl AluOp {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x0 => Some(AluOp::Add),
            0x1 => Some(AluOp::Sub),
            0x2 => Some(AluOp::Mul),
            0x3 => Some(AluOp::Div),
            0x4 => Some(AluOp::Mod),
            0x5 => Some(AluOp::Inc),
            0x6 => Some(AluOp::Dec),
            0x7 => Some(AluOp::Cmp),
            0x8 => Some(AluOp::And),
            0x9 => Some(AluOp::Not),
            0xA => Some(AluOp::Or),
            0xB => Some(AluOp::Xor),
            0xC => Some(AluOp::Shl),
            0xD => Some(AluOp::Shr),
            _ => None,
        }
    }

    /// ALU operation carried out by an opcode, if it is an ALU instruction
    pub fn from_opcode(opcode: Opcode) -> Option<Self> {
        if opcode.is_alu() {
            Self::from_u8(opcode.to_u8() & 0x0F)
        } else {
            None
        }
    }
}

/// Apply `op` to registers `a` and `b`, writing any result back into `a`
pub fn execute(op: AluOp, a: Register, b: Register, state: &mut VMState) -> Result<()> {
    let lhs = state.read_reg(a);
    let rhs = state.read_reg(b);

    match op {
        AluOp::Add => state.write_reg(a, lhs.wrapping_add(rhs)),
        AluOp::Mul => state.write_reg(a, lhs.wrapping_mul(rhs)),
        AluOp::Cmp => state.flags = Flags::compare(lhs, rhs),
        other => return Err(RuntimeError::UnsupportedAluOperation(other)),
    }

    Ok(())
}
