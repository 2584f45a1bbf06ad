//! # Error Types for LS-8

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("Invalid opcode: {0:#04x}")]
    InvalidOpcode(u8),

    #[error("Invalid register index: {0} (valid range: 0-7)")]
    InvalidRegister(u8),

    #[error("Program too large: {size} bytes (capacity {capacity})")]
    ProgramTooLarge { size: usize, capacity: usize },
}
