//! # LS-8 Runtime
//!
//! Fetch-decode-execute interpreter for the LS-8 instruction set.
//!
//! ## Features
//!
//! - **256 bytes of memory**: code, data and stack share one bounds-checked array
//! - **8 registers**: R0-R7, with R7 as the downward-growing stack pointer
//! - **ALU**: wrapping `ADD`/`MUL` and a three-way `CMP` setting `FL`
//! - **Control flow**: `CALL`/`RET` on the shared stack, `JMP`, `JEQ`, `JNE`
//!
//! ## Example
//!
//! ```rust
//! use ls8_runtime::{VM, VMConfig};
//! use ls8_spec::Program;
//!
//! // LDI R0,8; PRN R0; HLT
//! let program = Program::new(vec![0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]);
//! let vm = VM::new(&program, VMConfig::default()).unwrap();
//! let result = vm.run().unwrap();
//! assert_eq!(result.outputs, vec![8]);
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod alu;
pub mod execute;
pub mod io;
pub mod vm;

pub use state::{StackMode, VMState};
pub use memory::Memory;
pub use alu::AluOp;
pub use io::IOHandler;
pub use vm::{VM, VMConfig, ExecutionResult};
pub use error::RuntimeError;

/// Simple execution helper
///
/// Runs a program with the default configuration and returns its printed values.
pub fn run(program: &ls8_spec::Program) -> Result<Vec<u8>, RuntimeError> {
    let vm = VM::new(program, VMConfig::default())?;
    Ok(vm.run()?.outputs)
}
