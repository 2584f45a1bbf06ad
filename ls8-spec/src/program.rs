//! LS-8 program image
//!
//! A program is the dense byte sequence placed in memory starting at
//! [`LOAD_ADDRESS`](crate::LOAD_ADDRESS). There is no header: code and any
//! inline data share the same bytes.

use crate::error::SpecError;
use crate::MEMORY_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Image bytes
    pub code: Vec<u8>,
}

impl Program {
    pub fn new(code: Vec<u8>) -> Self {
        Self { code }
    }

    /// Image length in bytes
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Check the image fits in memory
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.code.len() > MEMORY_SIZE {
            return Err(SpecError::ProgramTooLarge {
                size: self.code.len(),
                capacity: MEMORY_SIZE,
            });
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.code.clone()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SpecError> {
        let program = Self::new(bytes.to_vec());
        program.validate()?;
        Ok(program)
    }
}

impl From<Vec<u8>> for Program {
    fn from(code: Vec<u8>) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LS-8 Program")?;
        writeln!(f, "  Size: {} / {} bytes", self.code.len(), MEMORY_SIZE)
    }
}
