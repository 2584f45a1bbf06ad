//! LS-8 Assembler
//!
//! Two front ends producing a [`Program`](ls8_spec::Program):
//!
//! - [`load_image`]: the binary-literal image format (`10000010 # LDI R0,8`)
//! - [`assemble`]: mnemonic assembly with labels (`LDI R0, 8`)
//!
//! ## Example
//!
//! ```rust
//! use ls8_assembler::{assemble, load_image};
//!
//! let source = r#"
//!     LDI R0, 8
//!     PRN R0
//!     HLT
//! "#;
//!
//! let program = assemble(source).unwrap();
//! let image = load_image("10000010\n0\n1000\n01000111\n0\n1\n").unwrap();
//! assert_eq!(program, image);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod encoder;
pub mod assembler;
pub mod loader;

pub use error::{AssemblerError, Result};
pub use assembler::assemble;
pub use loader::{load_image, load_image_file};
pub use parser::{parse_instruction, parse_register};
pub use encoder::{encode, encode_program};
