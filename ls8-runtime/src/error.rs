//! Runtime error types for LS-8

use thiserror::Error;
use ls8_disassembler::DisassemblerError;
use ls8_spec::SpecError;
use crate::alu::AluOp;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    SpecError(#[from] SpecError),

    #[error("Unknown instruction {opcode} at address {pc}")]
    UnknownInstruction { opcode: u8, pc: usize },

    #[error("Invalid register index {index} at address {pc}")]
    InvalidRegister { index: u8, pc: usize },

    #[error("Decode error at address {pc}: {source}")]
    Decode {
        pc: usize,
        #[source]
        source: DisassemblerError,
    },

    #[error("Unsupported ALU operation: {0:?}")]
    UnsupportedAluOperation(AluOp),

    #[error("Memory out of bounds: address {address:#x}")]
    OutOfBounds { address: usize },

    #[error("Stack overflow at address {pc}: push with SP at 0x00")]
    StackOverflow { pc: usize },

    #[error("Stack underflow at address {pc}: pop with SP at 0xFF")]
    StackUnderflow { pc: usize },

    #[error("Cycle limit exceeded: {limit}")]
    CycleLimitExceeded { limit: u64 },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RuntimeError {
    /// Map a decoder failure for the instruction at `pc`
    pub fn from_decode(err: DisassemblerError, pc: usize) -> Self {
        match err {
            DisassemblerError::UnknownOpcode(opcode) => RuntimeError::UnknownInstruction { opcode, pc },
            DisassemblerError::InvalidRegister(index) => RuntimeError::InvalidRegister { index, pc },
            source => RuntimeError::Decode { pc, source },
        }
    }

    /// Point a stack fault at the instruction that raised it.
    ///
    /// The stack helpers only see the already-advanced PC.
    pub fn at_pc(self, pc: usize) -> Self {
        match self {
            RuntimeError::StackOverflow { .. } => RuntimeError::StackOverflow { pc },
            RuntimeError::StackUnderflow { .. } => RuntimeError::StackUnderflow { pc },
            other => other,
        }
    }

    /// True for interpreter defects, as opposed to malformed programs
    pub fn is_defect(&self) -> bool {
        matches!(self, RuntimeError::UnsupportedAluOperation(_))
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RuntimeError::UnknownInstruction { .. } => 1,
            RuntimeError::UnsupportedAluOperation(_) => 70,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_unknown_instruction_display() {
        let err = RuntimeError::UnknownInstruction { opcode: 255, pc: 0 };
        assert_eq!(err.to_string(), "Unknown instruction 255 at address 0");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = RuntimeError::OutOfBounds { address: 0x100 };
        assert_eq!(err.to_string(), "Memory out of bounds: address 0x100");
    }

    #[test]
    fn test_unsupported_alu_display() {
        let err = RuntimeError::UnsupportedAluOperation(AluOp::Sub);
        assert_eq!(err.to_string(), "Unsupported ALU operation: Sub");
    }

    #[test]
    fn test_from_decode() {
        assert!(matches!(
            RuntimeError::from_decode(DisassemblerError::UnknownOpcode(0xFF), 4),
            RuntimeError::UnknownInstruction { opcode: 0xFF, pc: 4 }
        ));
        assert!(matches!(
            RuntimeError::from_decode(DisassemblerError::InvalidRegister(9), 2),
            RuntimeError::InvalidRegister { index: 9, pc: 2 }
        ));
        assert!(matches!(
            RuntimeError::from_decode(DisassemblerError::Empty, 1),
            RuntimeError::Decode { pc: 1, .. }
        ));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(RuntimeError::UnknownInstruction { opcode: 0, pc: 0 }.exit_code(), 1);
        assert_eq!(RuntimeError::UnsupportedAluOperation(AluOp::Div).exit_code(), 70);
        assert_eq!(RuntimeError::StackOverflow { pc: 0 }.exit_code(), 2);
        assert!(RuntimeError::UnsupportedAluOperation(AluOp::Div).is_defect());
        assert!(!RuntimeError::StackUnderflow { pc: 0 }.is_defect());
    }

    #[test]
    fn test_at_pc_only_rewrites_stack_faults() {
        assert!(matches!(
            RuntimeError::StackOverflow { pc: 9 }.at_pc(4),
            RuntimeError::StackOverflow { pc: 4 }
        ));
        assert!(matches!(
            RuntimeError::OutOfBounds { address: 256 }.at_pc(4),
            RuntimeError::OutOfBounds { address: 256 }
        ));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = IoError::new(ErrorKind::BrokenPipe, "pipe closed");
        let runtime_err: RuntimeError = io_err.into();
        assert!(runtime_err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_spec_error_from() {
        let spec_err = SpecError::ProgramTooLarge { size: 300, capacity: 256 };
        let runtime_err: RuntimeError = spec_err.into();
        assert!(runtime_err.to_string().contains("Program too large"));
    }
}
