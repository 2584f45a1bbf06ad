//! Disassembler errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisassemblerError {
    #[error("Unknown opcode: 0b{0:08b}")]
    UnknownOpcode(u8),

    #[error("Invalid register operand: {0}")]
    InvalidRegister(u8),

    #[error("Truncated instruction 0b{opcode:08b}: expected {expected} bytes, found {found}")]
    Truncated {
        opcode: u8,
        expected: usize,
        found: usize,
    },

    #[error("Empty input")]
    Empty,
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
