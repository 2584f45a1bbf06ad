//! # LS-8 Opcode Definitions
//!
//! Every instruction starts with a single opcode byte laid out as `AABCDDDD`:
//!
//! - `AA`: number of operand bytes that follow (0-2)
//! - `B`: 1 if the instruction is carried out by the ALU
//! - `C`: 1 if the instruction sets the program counter
//! - `DDDD`: instruction identifier within its group

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of operand bytes following an instruction byte.
///
/// Derived purely from the two most significant bits, so it is defined for
/// every byte, including ones that are not valid opcodes.
#[inline]
pub const fn operand_count(byte: u8) -> u8 {
    byte >> 6
}

/// Instruction opcode
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // ========== No operands ==========
    /// HLT: stop the machine
    Hlt = 0b0000_0001,
    /// RET: pop return address into PC
    Ret = 0b0001_0001,

    // ========== One operand ==========
    /// PUSH r: SP -= 1; mem[SP] = r
    Push = 0b0100_0101,
    /// POP r: r = mem[SP]; SP += 1
    Pop = 0b0100_0110,
    /// PRN r: print r as decimal
    Prn = 0b0100_0111,
    /// CALL r: push return address; PC = r
    Call = 0b0101_0000,
    /// JMP r: PC = r
    Jmp = 0b0101_0100,
    /// JEQ r: if equal flag set, PC = r
    Jeq = 0b0101_0101,
    /// JNE r: if equal flag clear, PC = r
    Jne = 0b0101_0110,

    // ========== Two operands ==========
    /// LDI r, imm: r = imm
    Ldi = 0b1000_0010,
    /// ADD a, b: a = a + b
    Add = 0b1010_0000,
    /// MUL a, b: a = a * b
    Mul = 0b1010_0010,
    /// CMP a, b: set FL from a <=> b
    Cmp = 0b1010_0111,
}

impl Opcode {
    /// All opcodes in ascending byte order
    pub const ALL: [Opcode; 13] = [
        Opcode::Hlt,
        Opcode::Ret,
        Opcode::Push,
        Opcode::Pop,
        Opcode::Prn,
        Opcode::Call,
        Opcode::Jmp,
        Opcode::Jeq,
        Opcode::Jne,
        Opcode::Ldi,
        Opcode::Add,
        Opcode::Mul,
        Opcode::Cmp,
    ];

    /// Bit marking ALU instructions
    pub const ALU_BIT: u8 = 0b0010_0000;

    /// Bit marking instructions that set the PC
    pub const PC_BIT: u8 = 0b0001_0000;

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0b0000_0001 => Some(Opcode::Hlt),
            0b0001_0001 => Some(Opcode::Ret),
            0b0100_0101 => Some(Opcode::Push),
            0b0100_0110 => Some(Opcode::Pop),
            0b0100_0111 => Some(Opcode::Prn),
            0b0101_0000 => Some(Opcode::Call),
            0b0101_0100 => Some(Opcode::Jmp),
            0b0101_0101 => Some(Opcode::Jeq),
            0b0101_0110 => Some(Opcode::Jne),
            0b1000_0010 => Some(Opcode::Ldi),
            0b1010_0000 => Some(Opcode::Add),
            0b1010_0010 => Some(Opcode::Mul),
            0b1010_0111 => Some(Opcode::Cmp),
            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Operand bytes following this opcode
    #[inline]
    pub const fn operand_count(self) -> u8 {
        operand_count(self as u8)
    }

    /// Total encoded size in bytes
    #[inline]
    pub const fn size(self) -> usize {
        1 + self.operand_count() as usize
    }

    #[inline]
    pub const fn is_alu(self) -> bool {
        self as u8 & Self::ALU_BIT != 0
    }

    #[inline]
    pub const fn sets_pc(self) -> bool {
        self as u8 & Self::PC_BIT != 0
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Ret => "RET",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Prn => "PRN",
            Opcode::Call => "CALL",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
            Opcode::Ldi => "LDI",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Cmp => "CMP",
        }
    }

    /// Case-insensitive mnemonic lookup
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl TryFrom<u8> for Opcode {
    type Error = crate::SpecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Opcode::from_u8(value).ok_or(crate::SpecError::InvalidOpcode(value))
    }
}
