//! Memory subsystem
//!
//! A flat 256-byte array shared by code, data and the stack. Every access is
//! bounds checked; nothing wraps silently.

use ls8_spec::{Program, LOAD_ADDRESS, MEMORY_SIZE};
use crate::error::{Result, RuntimeError};

#[derive(Debug, Clone)]
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Zero-filled memory
    pub fn new() -> Self {
        Memory {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    pub fn capacity(&self) -> usize {
        MEMORY_SIZE
    }

    pub fn read(&self, addr: usize) -> Result<u8> {
        self.data
            .get(addr)
            .copied()
            .ok_or(RuntimeError::OutOfBounds { address: addr })
    }

    pub fn write(&mut self, addr: usize, value: u8) -> Result<()> {
        let cell = self
            .data
            .get_mut(addr)
            .ok_or(RuntimeError::OutOfBounds { address: addr })?;
        *cell = value;
        Ok(())
    }

    /// `len` consecutive cells starting at `addr`
    pub fn read_range(&self, addr: usize, len: usize) -> Result<&[u8]> {
        let end = addr + len;
        if end > MEMORY_SIZE {
            return Err(RuntimeError::OutOfBounds { address: end - 1 });
        }
        Ok(&self.data[addr..end])
    }

    /// Non-failing read for diagnostics; out-of-range cells read as zero
    pub fn peek(&self, addr: usize) -> u8 {
        self.data.get(addr).copied().unwrap_or(0)
    }

    /// Copy a program image into memory at the load address
    pub fn load_program(&mut self, program: &Program) -> Result<()> {
        program.validate()?;
        let end = LOAD_ADDRESS + program.code.len();
        self.data[LOAD_ADDRESS..end].copy_from_slice(&program.code);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
