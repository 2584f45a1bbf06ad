//! VM state for LS-8

use ls8_spec::{Flags, Register, NUM_REGISTERS, STACK_TOP};
use serde::{Deserialize, Serialize};
use crate::error::{Result, RuntimeError};
use crate::memory::Memory;

/// Stack pointer arithmetic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackMode {
    /// Plain decrement/increment; leaving `[0, 255]` is an error
    #[default]
    Checked,
    /// SP wraps modulo the memory capacity
    Wrapping,
}

/// VM state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VMState {
    /// General-purpose registers (R7 is the stack pointer)
    pub registers: [u8; NUM_REGISTERS],

    /// Program counter
    pub pc: usize,

    /// Condition flags
    pub flags: Flags,

    /// Cleared by HLT
    pub running: bool,

    /// Instructions executed
    pub cycles: u64,

    /// Checked or wrapping SP arithmetic
    pub stack_mode: StackMode,
}

impl VMState {
    pub fn new(stack_mode: StackMode) -> Self {
        let mut state = VMState {
            registers: [0; NUM_REGISTERS],
            pc: 0,
            flags: Flags::empty(),
            running: true,
            cycles: 0,
            stack_mode,
        };

        state.write_reg(Register::SP, STACK_TOP);

        state
    }

    #[inline]
    pub fn read_reg(&self, reg: Register) -> u8 {
        self.registers[reg.index()]
    }

    #[inline]
    pub fn write_reg(&mut self, reg: Register, value: u8) {
        self.registers[reg.index()] = value;
    }

    #[inline]
    pub fn sp(&self) -> u8 {
        self.read_reg(Register::SP)
    }

    /// Decrement SP, then store `value` at the new top of stack
    pub fn push(&mut self, memory: &mut Memory, value: u8) -> Result<()> {
        let sp = self.decrement_sp(self.sp())?;
        memory.write(sp as usize, value)?;
        self.write_reg(Register::SP, sp);
        Ok(())
    }

    /// `PUSH reg`: decrement SP, then store `reg`.
    ///
    /// The register is read after SP moves, so `PUSH R7` stores the
    /// decremented stack pointer.
    pub fn push_reg(&mut self, memory: &mut Memory, reg: Register) -> Result<()> {
        let sp = self.decrement_sp(self.sp())?;
        self.write_reg(Register::SP, sp);
        memory.write(sp as usize, self.read_reg(reg))
    }

    /// Read the top of stack, then increment SP
    pub fn pop(&mut self, memory: &Memory) -> Result<u8> {
        let sp = self.sp();
        let next = self.increment_sp(sp)?;
        let value = memory.read(sp as usize)?;
        self.write_reg(Register::SP, next);
        Ok(value)
    }

    /// `POP reg`: store the top of stack into `reg`, then increment SP.
    ///
    /// SP is incremented from its value after the register write, so
    /// `POP R7` leaves SP one past the popped value.
    pub fn pop_reg(&mut self, memory: &Memory, reg: Register) -> Result<()> {
        let sp = self.sp();
        self.increment_sp(sp)?;
        let value = memory.read(sp as usize)?;
        let base = if reg == Register::SP { value } else { sp };
        let next = self.increment_sp(base)?;
        self.write_reg(reg, value);
        self.write_reg(Register::SP, next);
        Ok(())
    }

    fn decrement_sp(&self, sp: u8) -> Result<u8> {
        match self.stack_mode {
            StackMode::Checked => sp
                .checked_sub(1)
                .ok_or(RuntimeError::StackOverflow { pc: self.pc }),
            StackMode::Wrapping => Ok(sp.wrapping_sub(1)),
        }
    }

    fn increment_sp(&self, sp: u8) -> Result<u8> {
        match self.stack_mode {
            StackMode::Checked => sp
                .checked_add(1)
                .ok_or(RuntimeError::StackUnderflow { pc: self.pc }),
            StackMode::Wrapping => Ok(sp.wrapping_add(1)),
        }
    }

    /// Stop execution
    pub fn halt(&mut self) {
        self.running = false;
    }

    /// One-line dump: `TRACE: PC | IR OP1 OP2 | R0 .. R7`, all hex
    pub fn trace_line(&self, memory: &Memory) -> String {
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            memory.peek(self.pc),
            memory.peek(self.pc + 1),
            memory.peek(self.pc + 2)
        );
        for value in self.registers {
            line.push_str(&format!(" {:02X}", value));
        }
        line
    }
}

impl Default for VMState {
    fn default() -> Self {
        Self::new(StackMode::default())
    }
}
