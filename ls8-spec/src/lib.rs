//! # LS-8 Specification
//!
//! 8-bit byte-coded instruction set over a flat 256-byte memory.
//!
//! ## Key Features
//! - 8 general-purpose byte registers, R7 doubles as the stack pointer
//! - 256 bytes of memory shared by code, data and a downward-growing stack
//! - Instruction length encoded in the top two bits of the opcode byte
//! - Tri-state condition flag (equal / greater / less) set by `CMP`

pub mod error;
pub mod flags;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;

pub use error::SpecError;
pub use flags::Flags;
pub use instruction::Instruction;
pub use opcode::{operand_count, Opcode};
pub use program::Program;
pub use register::{Register, NUM_REGISTERS};

/// Number of addressable memory cells
pub const MEMORY_SIZE: usize = 256;

/// Initial value of the stack pointer (top of memory)
pub const STACK_TOP: u8 = 0xFF;

/// Address at which program images are loaded
pub const LOAD_ADDRESS: usize = 0;

/// Longest instruction: opcode byte plus two operands
pub const MAX_INSTRUCTION_SIZE: usize = 3;

/// Memory cell / register width
pub type Word = u8;
