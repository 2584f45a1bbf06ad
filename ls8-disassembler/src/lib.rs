//! # LS-8 Disassembler
//!
//! Decode LS-8 instruction bytes and render programs as readable listings.
//!
//! The [`decode`] function is also the runtime's decoder: the execution loop
//! hands it the bytes of each fetched instruction.
//!
//! ## Example
//!
//! ```rust
//! use ls8_spec::{Instruction, Program, Register};
//! use ls8_disassembler::{decode, disassemble};
//!
//! let instr = decode(&[0b1000_0010, 0, 8]).unwrap();
//! assert_eq!(instr, Instruction::Ldi { reg: Register::R0, imm: 8 });
//!
//! let program = Program::new(vec![0b1000_0010, 0, 8, 0b0000_0001]);
//! println!("{}", disassemble(&program));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::disassemble;
pub use decoder::{decode, decode_operands};
pub use formatter::{format, format_byte, format_image};
